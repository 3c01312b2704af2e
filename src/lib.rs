pub mod aggregation;
pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod services;
pub mod standards;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::aggregation::HighlightFilter;
use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::domain::{NameMatch, Stroke};
use crate::services::report::ReportService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_best(swimmer: &str, age: Option<u32>, substring: bool, json: bool) -> Result<()> {
    let mode = if substring { NameMatch::Substring } else { NameMatch::Exact };
    run_report(|service| async move { service.best(swimmer, age, mode, json).await })
}

pub fn handle_highlights(swimmer: &str, age: Option<u32>, count: Option<usize>, achieved_only: bool) -> Result<()> {
    let filter = if achieved_only { HighlightFilter::AchievedOnly } else { HighlightFilter::All };
    run_report(|service| async move { service.highlights(swimmer, age, count, filter).await })
}

pub fn handle_recent(swimmer: &str) -> Result<()> {
    run_report(|service| async move { service.recent(swimmer).await })
}

pub fn handle_sheet(swimmer: &str, stroke: Stroke, age: Option<u32>) -> Result<()> {
    run_report(|service| async move { service.sheet(swimmer, stroke, age).await })
}

pub fn handle_standings(event: &str, swimmers: &[String], age: Option<u32>) -> Result<()> {
    run_report(|service| async move { service.standings(event, swimmers, age).await })
}

fn run_report<F, Fut>(report: F) -> Result<()>
where
    F: FnOnce(ReportService) -> Fut,
    Fut: std::future::Future<Output = Result<()>>,
{
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ReportService::new(config)?;
        report(service).await
    })
}
