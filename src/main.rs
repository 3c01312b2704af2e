use anyhow::Result;

use swim_standards::cli::Command;
use swim_standards::{handle_best, handle_highlights, handle_recent, handle_sheet, handle_standings, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Best { swimmer, age, substring, json } => handle_best(swimmer, *age, *substring, *json),
        Command::Highlights { swimmer, age, count, achieved_only } => {
            handle_highlights(swimmer, *age, *count, *achieved_only)
        }
        Command::Recent { swimmer } => handle_recent(swimmer),
        Command::Sheet { swimmer, stroke, age } => handle_sheet(swimmer, *stroke, *age),
        Command::Standings { event, swimmer, age } => handle_standings(event, swimmer, *age),
    }
}
