mod collection;
pub mod dates;
pub mod event;
pub mod models;
pub mod time_codec;

pub use collection::ResultCollection;
pub use dates::{days_since, parse_result_date};
pub use event::{Course, EventKey, Stroke};
pub use models::*;
pub use time_codec::{format_gap, format_seconds_to_time, parse_time_to_seconds};
