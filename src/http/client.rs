use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::errors::with_fetch_context;

/// HTTP client for JSON feeds. The timeout bounds every request so an
/// optional feed can never block a report indefinitely.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(user_agent: &str, timeout_secs: u64) -> Result<Self> {
        let client = Self::build_client(user_agent, timeout_secs)?;
        Ok(Self { client })
    }

    pub async fn get_json(&self, url: &str) -> Result<Value> {
        let response = self.send_get_request(url).await?;

        if !response.status().is_success() {
            anyhow::bail!("{} returned status: {}", url, response.status());
        }

        let text = with_fetch_context(response.text().await, url)?;
        serde_json::from_str(&text).with_context(|| format!("Failed to parse JSON from {}", url))
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    async fn send_get_request(&self, url: &str) -> Result<reqwest::Response> {
        with_fetch_context(self.client.get(url).send().await, url)
    }
}
