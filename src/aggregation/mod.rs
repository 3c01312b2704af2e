pub mod best_times;
pub mod merge;
pub mod recent;
pub mod sheet;
pub mod standings;
pub mod views;

pub use best_times::{best_for_event, best_time_per_event};
pub use merge::merge_official_and_unofficial;
pub use recent::{most_recent_n, most_recent_per_stroke, newest_first};
pub use sheet::{stroke_sheet, SheetRow};
pub use standings::{standings, StandingsEntry};
pub use views::{best_time_views, highlights, BestTimeView, Highlight, HighlightFilter, LabelSource};
