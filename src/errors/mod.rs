use anyhow::Context as _;
use thiserror::Error;

/// Domain errors raised by the standards engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SwimError {
    #[error("invalid race time: {0:?}")]
    InvalidTime(String),
    #[error("invalid event label: {0:?}")]
    InvalidEvent(String),
    #[error("invalid result date: {0:?}")]
    InvalidDate(String),
    #[error("malformed standards table: {0}")]
    MalformedStandards(String),
    #[error("{feed} unavailable: {reason}")]
    SourceUnavailable { feed: String, reason: String },
}

impl SwimError {
    pub fn unavailable(feed: &str, err: &anyhow::Error) -> Self {
        SwimError::SourceUnavailable {
            feed: feed.to_string(),
            reason: format!("{err:#}"),
        }
    }
}

/// Add context to fetch errors
pub fn fetch_context(url: &str) -> String {
    format!("Failed to fetch from: {}", url)
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}

/// Wrap result with fetch context
pub fn with_fetch_context<T, E>(result: Result<T, E>, url: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(fetch_context(url))
}

/// Wrap result with parse context
pub fn with_parse_context<T, E>(result: Result<T, E>, data_type: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(parse_context(data_type))
}
