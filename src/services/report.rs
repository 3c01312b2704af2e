use anyhow::{Context, Result};
use chrono::{NaiveDateTime, Utc};
use colored::{ColoredString, Colorize};
use log::info;

use super::loader::{FeedLoader, LoadedData};
use crate::aggregation::{
    best_time_views, highlights, most_recent_per_stroke, newest_first, standings, stroke_sheet, BestTimeView,
    Highlight, HighlightFilter, LabelSource, SheetRow, StandingsEntry,
};
use crate::config::settings::{AppConfig, ReportSettings};
use crate::domain::{days_since, format_gap, format_seconds_to_time, EventKey, NameMatch, RaceResult, Stroke};
use crate::standards::{Achievement, StandardsEvaluator, StandardsLibrary};

const STANDARDS_UNAVAILABLE: &str = "Motivational standards unavailable, tiers not shown";

/// Runs one report command: load the feeds, aggregate, print.
pub struct ReportService {
    loader: FeedLoader,
    report: ReportSettings,
}

impl ReportService {
    pub fn new(config: AppConfig) -> Result<Self> {
        Ok(Self {
            loader: FeedLoader::new(config.feeds)?,
            report: config.report,
        })
    }

    pub async fn best(&self, swimmer: &str, age: Option<u32>, mode: NameMatch, json: bool) -> Result<()> {
        let data = self.load().await?;
        let age = resolve_age(age, &data.results, swimmer, mode, self.report.default_age);
        let evaluator = StandardsEvaluator::new(&data.library);

        let views = best_time_views(&data.results, swimmer, mode, &evaluator, age);
        if json {
            println!("{}", serde_json::to_string_pretty(&views).context("Failed to serialize best times")?);
            return Ok(());
        }

        print_lines(render_best(swimmer, age, &views, &data.library));
        Ok(())
    }

    pub async fn highlights(
        &self,
        swimmer: &str,
        age: Option<u32>,
        count: Option<usize>,
        filter: HighlightFilter,
    ) -> Result<()> {
        let data = self.load().await?;
        let age = resolve_age(age, &data.results, swimmer, NameMatch::Exact, self.report.default_age);
        let evaluator = StandardsEvaluator::new(&data.library);

        let own = swimmer_results(&data.results, swimmer, NameMatch::Exact);
        let count = count.unwrap_or(self.report.highlight_count);
        let items = highlights(&own, count, &evaluator, age, filter);

        print_lines(render_highlights(swimmer, &items));
        Ok(())
    }

    pub async fn recent(&self, swimmer: &str) -> Result<()> {
        let data = self.load().await?;
        let own = swimmer_results(&data.results, swimmer, NameMatch::Exact);

        print_lines(render_recent(swimmer, &own, Utc::now().naive_utc()));
        Ok(())
    }

    pub async fn sheet(&self, swimmer: &str, stroke: Stroke, age: Option<u32>) -> Result<()> {
        let data = self.load().await?;
        let age = resolve_age(age, &data.results, swimmer, NameMatch::Exact, self.report.default_age);
        let evaluator = StandardsEvaluator::new(&data.library);

        let rows = stroke_sheet(&data.results, swimmer, stroke, &evaluator, age);
        print_lines(render_sheet(swimmer, stroke, &rows, &data.library));
        Ok(())
    }

    pub async fn standings(&self, event: &str, swimmers: &[String], age: Option<u32>) -> Result<()> {
        let event = EventKey::parse(event)?;
        let data = self.load().await?;
        let age = age.unwrap_or(self.report.default_age);
        let evaluator = StandardsEvaluator::new(&data.library);

        let entries = standings(
            &data.results,
            &event,
            swimmers,
            &evaluator,
            age,
            self.report.scale_padding,
        );
        print_lines(render_standings(&event, entries.as_deref()));
        Ok(())
    }

    // --- Helper Methods ---

    async fn load(&self) -> Result<LoadedData> {
        let data = self.loader.load_all().await?;
        info!("=== Feeds ready, {} results ===", data.results.len());
        Ok(data)
    }
}

/// Explicit age, else the age recorded on the newest result matching
/// `swimmer` under `mode`, else the configured default.
fn resolve_age(
    explicit: Option<u32>,
    results: &[RaceResult],
    swimmer: &str,
    mode: NameMatch,
    default_age: u32,
) -> u32 {
    explicit
        .or_else(|| {
            let own = swimmer_results(results, swimmer, mode);
            newest_first(&own).into_iter().find_map(|r| r.age_years())
        })
        .unwrap_or(default_age)
}

fn swimmer_results(results: &[RaceResult], swimmer: &str, mode: NameMatch) -> Vec<RaceResult> {
    results
        .iter()
        .filter(|r| r.matches_swimmer(swimmer, mode))
        .cloned()
        .collect()
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}

fn paint(label: &str, achieved: Achievement) -> ColoredString {
    match achieved {
        Achievement::Tier(_) => label.green().bold(),
        Achievement::SlowerThan(_) => label.yellow(),
        Achievement::Unrated => label.dimmed(),
    }
}

fn unofficial_marker(result: &RaceResult) -> &'static str {
    if result.is_unofficial() { "*" } else { " " }
}

fn render_best(swimmer: &str, age: u32, views: &[BestTimeView], library: &StandardsLibrary) -> Vec<String> {
    let mut lines = vec![format!("{} ({}): best times", swimmer.bold(), age)];
    if library.motivational.is_none() {
        lines.push(STANDARDS_UNAVAILABLE.red().to_string());
    }
    if views.is_empty() {
        lines.push("No results found".to_string());
        return lines;
    }

    for view in views {
        let tier = view.evaluation.tier;
        let gap = tier.gap_seconds.map(format_gap).unwrap_or_default();
        let regional = view.evaluation.regional.map(|b| b.label()).unwrap_or("");
        let target = view
            .evaluation
            .next_target
            .map(|t| {
                format!(
                    "→ {} {} (-{:.2})",
                    t.label,
                    format_seconds_to_time(Some(t.cutoff_seconds)),
                    t.gap_seconds
                )
            })
            .unwrap_or_default();

        lines.push(format!(
            "{:<12} {:>9}{} {:<16} {:<5} {:>7} {:<4} {}",
            view.event.to_string(),
            format_seconds_to_time(view.result.time_seconds()),
            unofficial_marker(&view.result),
            paint(&tier.achieved.label(), tier.achieved),
            tier.next.label(),
            gap,
            regional,
            target
        ));
    }
    lines
}

fn render_highlights(swimmer: &str, items: &[Highlight]) -> Vec<String> {
    let mut lines = vec![format!("{}: recent highlights", swimmer.bold())];
    if items.is_empty() {
        lines.push("No results found".to_string());
    }

    for item in items {
        let label = match item.label_source {
            LabelSource::Evaluated => paint(&item.tier_label, item.evaluation.tier.achieved).to_string(),
            LabelSource::Recorded => format!("{} (recorded)", item.tier_label),
        };
        lines.push(format!(
            "{:<10} {:<12} {:>9}{} {:<16} {}",
            item.result.date,
            item.result.event,
            format_seconds_to_time(item.result.time_seconds()),
            unofficial_marker(&item.result),
            label,
            item.result.meet
        ));
    }
    lines
}

fn render_recent(swimmer: &str, results: &[RaceResult], now: NaiveDateTime) -> Vec<String> {
    let mut lines = vec![format!("{}: most recent swim per stroke", swimmer.bold())];
    let latest = most_recent_per_stroke(results);
    if latest.is_empty() {
        lines.push("No results found".to_string());
    }

    for (stroke, result) in latest {
        let ago = match days_since(&result.date, now) {
            Some(0) => "today".to_string(),
            Some(1) => "1 day ago".to_string(),
            Some(days) => format!("{} days ago", days),
            None => "date unknown".to_string(),
        };
        lines.push(format!(
            "{:<7} {:<12} {:>9}{} {:<10} {}",
            stroke.short_name(),
            result.event,
            format_seconds_to_time(result.time_seconds()),
            unofficial_marker(result),
            result.date,
            ago
        ));
    }
    lines
}

fn render_sheet(swimmer: &str, stroke: Stroke, rows: &[SheetRow], library: &StandardsLibrary) -> Vec<String> {
    let mut lines = vec![format!("{}: {}", swimmer.bold(), stroke.full_name())];
    if library.motivational.is_none() {
        lines.push(STANDARDS_UNAVAILABLE.red().to_string());
        return lines;
    }

    for row in rows {
        let marker = if row.is_unofficial() { "*" } else { " " };
        lines.push(format!(
            "{:<12} {:>9}{} {:<16} {}",
            row.event.to_string(),
            row.time_display(),
            marker,
            paint(&row.tier.achieved.label(), row.tier.achieved),
            row.delta_display()
        ));
    }
    lines
}

fn render_standings(event: &EventKey, entries: Option<&[StandingsEntry]>) -> Vec<String> {
    let mut lines = vec![format!("Standings: {}", event.to_string().bold())];
    let Some(entries) = entries else {
        lines.push(format!("No motivational standards for {}", event));
        return lines;
    };

    for entry in entries {
        let level = match (entry.achieved, entry.level_label()) {
            (Some(achieved), Some(label)) => paint(&label, achieved).to_string(),
            _ => String::new(),
        };
        let position = entry
            .position
            .map(|p| format!("{:>3.0}%", p * 100.0))
            .unwrap_or_default();
        lines.push(format!(
            "{:<24} {:>9} {:<6} {}",
            entry.swimmer,
            format_seconds_to_time(entry.best_seconds),
            level,
            position
        ));
    }
    lines
}
