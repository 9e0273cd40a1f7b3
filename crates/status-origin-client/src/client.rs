//! Origin fetching

use crate::error::{OriginError, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_ORIGIN_URL: &str = "https://http.cat";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP client for a single origin service
#[derive(Debug, Clone)]
pub struct OriginClient {
    client: Client,
    base_url: String,
}

impl OriginClient {
    /// Create a client for `base_url` whose requests give up after `timeout`
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the resource for `code`
    pub fn url_for(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }

    /// Fetch the full body for `code`
    pub async fn fetch(&self, code: &str) -> Result<Vec<u8>> {
        let url = self.url_for(code);
        debug!(url = %url, "Fetching from origin");

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            warn!(status = %response.status(), url = %url, "Origin returned non-success status");
            return Err(OriginError::Status(response.status()));
        }

        let data = response.bytes().await?.to_vec();

        debug!(size = data.len(), url = %url, "Fetched from origin");
        Ok(data)
    }
}
