use anyhow::{Context, Result};
use log::{info, warn};
use serde_json::Value;

use crate::cache::Cache;
use crate::config::settings::FeedSettings;
use crate::domain::{RaceResult, UnofficialRecord};
use crate::errors::{with_parse_context, SwimError};
use crate::http::HttpClient;

/// Client for the published swim-stats JSON feeds
#[derive(Clone)]
pub struct SwimDataClient {
    client: HttpClient,
    base_url: String,
}

impl SwimDataClient {
    pub fn new(settings: &FeedSettings) -> Result<Self> {
        let client = HttpClient::new(settings.user_agent, settings.timeout_secs)?;
        Ok(Self {
            client,
            base_url: settings.base_url.clone(),
        })
    }

    /// Fetch one feed file as raw JSON
    pub async fn fetch_feed(&self, file: &str) -> Result<Value> {
        let url = self.build_url(file);
        info!("Fetching {}", url);
        self.client.get_json(&url).await
    }

    pub async fn fetch_official_results(&self, file: &str) -> Result<Vec<RaceResult>> {
        let value = self.fetch_feed(file).await?;
        with_parse_context(serde_json::from_value(value), file)
    }

    pub async fn fetch_unofficial_results(&self, file: &str) -> Result<Vec<UnofficialRecord>> {
        let value = self.fetch_feed(file).await?;
        with_parse_context(serde_json::from_value(value), file)
    }

    /// Fetch a reference feed and convert it with `parse`.
    ///
    /// A cached copy is used while it still parses. A downloaded copy is
    /// written to the cache only once `parse` has accepted it.
    pub async fn fetch_and_cache_feed<T, F>(&self, file: &str, cache: &Cache, parse: F) -> Result<T>
    where
        F: Fn(&Value) -> Result<T, SwimError>,
    {
        match cache.load_raw(file) {
            Ok(Some(value)) => match parse(&value) {
                Ok(parsed) => return Ok(parsed),
                Err(e) => warn!("Ignoring invalid cache entry for {}: {}", file, e),
            },
            Ok(None) => {}
            Err(e) => warn!("Ignoring unreadable cache entry for {}: {:#}", file, e),
        }

        let value = self
            .fetch_feed(file)
            .await
            .with_context(|| format!("Failed to fetch reference feed {}", file))?;
        let parsed = with_parse_context(parse(&value), file)?;

        if let Err(e) = cache.save_raw(file, &value) {
            warn!("Failed to save {} to cache: {:?}", file, e);
        }

        Ok(parsed)
    }

    // --- Helper Methods ---

    fn build_url(&self, file: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), file.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standards::{Flavor, StandardsTable};
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn client(base_url: &str) -> SwimDataClient {
        let settings = FeedSettings {
            base_url: base_url.to_string(),
            ..FeedSettings::default()
        };
        SwimDataClient::new(&settings).unwrap()
    }

    fn as_is(value: &Value) -> Result<Value, SwimError> {
        Ok(value.clone())
    }

    fn motivational(value: &Value) -> Result<StandardsTable, SwimError> {
        StandardsTable::from_feed(Flavor::Motivational, value)
    }

    /// Local HTTP server answering every request with `body`; returns its base URL.
    async fn serve_json(body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let mut request = [0u8; 4096];
                let _ = socket.read(&mut request).await;
                let response = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        format!("http://{}/", addr)
    }

    #[test]
    fn test_build_url_joins_single_slash() {
        assert_eq!(
            client("https://example.org/swim-stats/").build_url("times.json"),
            "https://example.org/swim-stats/times.json"
        );
        assert_eq!(
            client("https://example.org/swim-stats").build_url("/times.json"),
            "https://example.org/swim-stats/times.json"
        );
    }

    #[tokio::test]
    async fn test_cached_feed_skips_network() {
        let temp_dir = std::env::temp_dir().join("swim_standards_test_feed_cache");
        let cache = Cache::new(&temp_dir).unwrap();
        let feed = json!({ "Girls": {} });
        cache.save_raw("farwestern_25_girls.json", &feed).unwrap();

        // Unroutable base URL: the cached copy must be used.
        let value = client("http://127.0.0.1:9/")
            .fetch_and_cache_feed("farwestern_25_girls.json", &cache, as_is)
            .await
            .unwrap();
        assert_eq!(value, feed);

        cache.clear().unwrap();
    }

    #[tokio::test]
    async fn test_rejected_feed_is_not_cached() {
        let temp_dir = std::env::temp_dir().join("swim_standards_test_feed_rejected");
        let cache = Cache::new(&temp_dir).unwrap();
        cache.clear().unwrap();
        let base_url = serve_json(r#"{ "Girls": { "11-12": "not a table" } }"#).await;

        let result = client(&base_url)
            .fetch_and_cache_feed("motivational.json", &cache, motivational)
            .await;

        assert!(result.is_err());
        assert!(!cache.exists("motivational.json"));

        cache.clear().unwrap();
    }

    #[tokio::test]
    async fn test_accepted_feed_is_cached() {
        let temp_dir = std::env::temp_dir().join("swim_standards_test_feed_accepted");
        let cache = Cache::new(&temp_dir).unwrap();
        cache.clear().unwrap();
        let base_url =
            serve_json(r#"{ "Girls": { "11-12": { "SCY": { "FR": { "50": { "B": "41.20" } } } } } }"#).await;

        let table = client(&base_url)
            .fetch_and_cache_feed("motivational.json", &cache, motivational)
            .await
            .unwrap();

        assert_eq!(table.len(), 1);
        assert!(cache.exists("motivational.json"));

        cache.clear().unwrap();
    }

    #[tokio::test]
    async fn test_invalid_cache_entry_is_refetched() {
        let temp_dir = std::env::temp_dir().join("swim_standards_test_feed_refetch");
        let cache = Cache::new(&temp_dir).unwrap();
        cache.clear().unwrap();
        cache.save_raw("motivational.json", &json!({ "Boys": {} })).unwrap();
        let base_url =
            serve_json(r#"{ "Girls": { "11-12": { "SCY": { "FR": { "50": { "B": "41.20" } } } } } }"#).await;

        let table = client(&base_url)
            .fetch_and_cache_feed("motivational.json", &cache, motivational)
            .await
            .unwrap();

        assert_eq!(table.len(), 1);
        let cached = cache.load_raw("motivational.json").unwrap().unwrap();
        assert!(cached.get("Girls").is_some());

        cache.clear().unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_feed_is_an_error() {
        let result = client("http://127.0.0.1:9/")
            .fetch_official_results("times.json")
            .await;

        assert!(result.is_err());
    }
}
