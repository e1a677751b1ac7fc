use crate::{dataset::Dataset, DEFAULT_URL};
use anyhow::{bail, Context};
use log::info;
use reqwest::{Client, StatusCode};

/// Fetches the temperature document over HTTP.
///
/// One GET per call with no retry or caching; callers decide whether to try
/// again.
#[derive(Debug, Clone)]
pub struct DataSource {
    url: String,
    client: Client,
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::new(DEFAULT_URL)
    }
}

impl DataSource {
    pub fn new(url: &str) -> Self {
        DataSource::with_client(url, Client::new())
    }

    pub fn with_client(url: &str, client: Client) -> Self {
        DataSource {
            url: url.to_string(),
            client,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Download the raw document body.
    pub async fn fetch_body(&self) -> anyhow::Result<String> {
        info!("Fetching temperature dataset from {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", self.url))?;
        if response.status() != StatusCode::OK {
            bail!("Bad response status from {}: {}", self.url, response.status());
        }
        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from {}", self.url))?;
        Ok(body)
    }

    /// Download and parse the dataset.
    pub async fn fetch(&self) -> anyhow::Result<Dataset> {
        let body = self.fetch_body().await?;
        let dataset = Dataset::from_json(&body)?;
        info!(
            "Fetched {} records (base temperature {})",
            dataset.records.len(),
            dataset.base_temperature
        );
        Ok(dataset)
    }
}
