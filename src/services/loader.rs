use anyhow::Result;
use futures::future::join_all;
use log::{error, info, warn};
use serde_json::Value;

use crate::aggregation::merge::{OFFICIAL_FEED, UNOFFICIAL_FEED};
use crate::aggregation::merge_official_and_unofficial;
use crate::api::SwimDataClient;
use crate::cache::Cache;
use crate::config::settings::FeedSettings;
use crate::domain::RaceResult;
use crate::errors::SwimError;
use crate::standards::{Flavor, StandardsLibrary, StandardsTable};

/// Everything a report needs, fetched in one go
pub struct LoadedData {
    pub results: Vec<RaceResult>,
    pub library: StandardsLibrary,
}

/// Fetches the results feeds and standards tables concurrently.
///
/// Only the official results feed is required. Every other feed resolves to
/// present or absent, and an absent feed is logged rather than propagated.
pub struct FeedLoader {
    client: SwimDataClient,
    cache: Cache,
    feeds: FeedSettings,
}

impl FeedLoader {
    pub fn new(feeds: FeedSettings) -> Result<Self> {
        Ok(Self {
            client: SwimDataClient::new(&feeds)?,
            cache: Cache::new(&feeds.cache_dir)?,
            feeds,
        })
    }

    pub async fn load_all(&self) -> Result<LoadedData, SwimError> {
        info!("=== Loading feeds ===");

        let (results, library) = tokio::join!(self.load_results(), self.load_standards());
        let results = results?;

        info!("  → {} results loaded", results.len());
        Ok(LoadedData { results, library })
    }

    pub async fn load_results(&self) -> Result<Vec<RaceResult>, SwimError> {
        let (official, unofficial) = tokio::join!(
            self.client.fetch_official_results(self.feeds.official_results),
            self.client.fetch_unofficial_results(self.feeds.unofficial_results),
        );

        if let Err(e) = &official {
            error!("Failed to load {}: {:#}", OFFICIAL_FEED, e);
        }
        if unofficial.is_err() {
            info!("  → {} unavailable", UNOFFICIAL_FEED);
        }

        merge_official_and_unofficial(official, unofficial)
    }

    pub async fn load_standards(&self) -> StandardsLibrary {
        let (motivational, agc, fw) = tokio::join!(
            self.load_motivational(),
            self.load_table(Flavor::Regional, self.feeds.agc),
            self.load_table(Flavor::Regional, self.feeds.fw),
        );

        info!(
            "  → Standards loaded: motivational={}, AGC={}, FW={}",
            motivational.is_some(),
            agc.is_some(),
            fw.is_some()
        );
        StandardsLibrary::new(motivational, agc, fw)
    }

    /// One table per age bracket, merged. Absent only if every bracket failed.
    async fn load_motivational(&self) -> Option<StandardsTable> {
        let tables = join_all(
            self.feeds
                .motivational
                .iter()
                .map(|(_, file)| self.load_table(Flavor::Motivational, file)),
        )
        .await;

        let mut merged: Option<StandardsTable> = None;
        for table in tables.into_iter().flatten() {
            match merged.as_mut() {
                Some(existing) => {
                    if let Err(e) = existing.merge(table) {
                        warn!("Skipping motivational table: {}", e);
                    }
                }
                None => merged = Some(table),
            }
        }
        merged
    }

    async fn load_table(&self, flavor: Flavor, file: &str) -> Option<StandardsTable> {
        let parse = |feed: &Value| StandardsTable::from_feed(flavor, feed);

        match self.client.fetch_and_cache_feed(file, &self.cache, parse).await {
            Ok(table) if table.is_empty() => {
                warn!("Standards feed {} has no usable cells", file);
                None
            }
            Ok(table) => Some(table),
            Err(e) => {
                warn!("Standards feed {} unavailable: {:#}", file, e);
                None
            }
        }
    }
}
