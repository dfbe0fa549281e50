//! HTTP page transport backed by a blocking reqwest client.

use crate::config::HttpConfig;
use corkboard_search::{PageFetcher, SearchError};
use std::time::Duration;
use tracing::debug;

/// Fetches search result pages over HTTP.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Build a fetcher from HTTP settings.
    pub fn new(config: &HttpConfig) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> corkboard_search::Result<String> {
        debug!(%url, "fetching page");
        self.client
            .get(url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .and_then(|response| response.text())
            .map_err(|source| SearchError::Fetch {
                url: url.to_string(),
                source: Box::new(source),
            })
    }
}
