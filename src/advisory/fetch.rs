//! HTTP download of the advisory bulletin

use super::BulletinSource;
use crate::config::AdvisoryConfig;
use crate::{Result, StormError};
use reqwest::blocking::Client;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

/// Blocking HTTP client for a single advisory URL
#[derive(Debug, Clone)]
pub struct HttpBulletinSource {
    client: Client,
    url: String,
}

impl HttpBulletinSource {
    /// Create a new bulletin client from advisory settings
    pub fn new(config: &AdvisoryConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|source| StormError::Fetch {
                url: config.url.clone(),
                source,
            })?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl BulletinSource for HttpBulletinSource {
    fn origin(&self) -> &str {
        &self.url
    }

    #[instrument(name = "fetch_bulletin", skip(self), fields(url = %self.url))]
    fn fetch(&self) -> Result<String> {
        let start_time = Instant::now();
        debug!("Requesting advisory bulletin");

        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|source| StormError::Fetch {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        debug!("HTTP response received: {}", status);

        let response = response.error_for_status().map_err(|source| {
            warn!("Advisory request failed with HTTP {}", status);
            StormError::Fetch {
                url: self.url.clone(),
                source,
            }
        })?;

        let text = response.text().map_err(|source| StormError::Read {
            url: self.url.clone(),
            source,
        })?;

        info!(
            "Fetched advisory bulletin ({} bytes) in {:.3}s",
            text.len(),
            start_time.elapsed().as_secs_f64()
        );

        Ok(text)
    }
}
