use clap::{Parser, Subcommand};

use crate::domain::Stroke;

#[derive(Parser, Debug)]
#[command(author, version, about = "Youth swimming time standards and rankings")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Best time per event with tier, regional qualifier and next target
    Best {
        #[arg(short, long)]
        swimmer: String,
        /// Age used for standards lookup (defaults to the age on the newest result)
        #[arg(short, long)]
        age: Option<u32>,
        /// Match any name containing the given text
        #[arg(long)]
        substring: bool,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Most recent results annotated with the tier achieved
    Highlights {
        #[arg(short, long)]
        swimmer: String,
        #[arg(short, long)]
        age: Option<u32>,
        /// Number of results to show (defaults to 5)
        #[arg(short, long)]
        count: Option<usize>,
        /// Leave out swims slower than every tier
        #[arg(long)]
        achieved_only: bool,
    },
    /// Most recent swim per stroke with days elapsed
    Recent {
        #[arg(short, long)]
        swimmer: String,
    },
    /// Per-stroke sheet across both courses
    Sheet {
        #[arg(short, long)]
        swimmer: String,
        /// FR, BK, BR, FL or IM
        #[arg(long)]
        stroke: Stroke,
        #[arg(short, long)]
        age: Option<u32>,
    },
    /// Where each named swimmer stands in one event
    Standings {
        /// Event label, e.g. "50 FR SCY"
        #[arg(short, long)]
        event: String,
        #[arg(short, long, required = true, num_args = 1..)]
        swimmer: Vec<String>,
        #[arg(short, long)]
        age: Option<u32>,
    },
}
