use crate::standards::age_group::{OLDER_BRACKET, YOUNGER_BRACKET};
use crate::standards::DEFAULT_SCALE_PADDING;

pub const BASE_URL_ENV: &str = "SWIM_STATS_BASE_URL";
pub const CACHE_DIR_ENV: &str = "SWIM_STATS_CACHE_DIR";

pub struct FeedSettings {
    pub base_url: String,
    pub cache_dir: String,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
    pub official_results: &'static str,
    pub unofficial_results: &'static str,
    /// Motivational tables, one file per age bracket
    pub motivational: Vec<(&'static str, &'static str)>,
    pub agc: &'static str,
    pub fw: &'static str,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            base_url: "https://aruslan.io/swim-stats/".to_string(),
            cache_dir: "cache".to_string(),
            user_agent: "SwimStandards/0.1",
            timeout_secs: 30,
            official_results: "times.json",
            unofficial_results: "unofficial_times.json",
            motivational: vec![
                (YOUNGER_BRACKET, "motivational_24_girls_11-12.json"),
                (OLDER_BRACKET, "motivational_24_girls_13-14.json"),
            ],
            agc: "agc_25_girls.json",
            fw: "farwestern_25_girls.json",
        }
    }
}

pub struct ReportSettings {
    pub default_age: u32,
    pub highlight_count: usize,
    pub scale_padding: f64,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            default_age: 12,
            highlight_count: 5,
            scale_padding: DEFAULT_SCALE_PADDING,
        }
    }
}

pub struct AppConfig {
    pub feeds: FeedSettings,
    pub report: ReportSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    /// Defaults, with the feed location and cache directory overridable from
    /// the environment.
    pub fn new() -> Self {
        let mut feeds = FeedSettings::default();
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            feeds.base_url = base_url;
        }
        if let Ok(cache_dir) = std::env::var(CACHE_DIR_ENV) {
            feeds.cache_dir = cache_dir;
        }

        Self {
            feeds,
            report: ReportSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_feeds_cover_both_brackets() {
        let feeds = FeedSettings::default();
        let brackets: Vec<&str> = feeds.motivational.iter().map(|(bracket, _)| *bracket).collect();

        assert_eq!(brackets, vec!["11-12", "13-14"]);
        assert!(feeds.base_url.ends_with('/'));
    }

    #[test]
    fn test_report_defaults() {
        let report = ReportSettings::default();

        assert_eq!(report.highlight_count, 5);
        assert_eq!(report.default_age, 12);
        assert_eq!(report.scale_padding, 1.15);
    }
}
