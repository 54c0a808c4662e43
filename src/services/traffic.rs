// src/services/traffic.rs

//! Traffic endpoint client.
//!
//! Fetches the monthly traffic series for a forum and extracts the figures
//! used by the ranking. Transport and decode failures are retried with
//! exponential backoff up to a configured attempt cap; exhaustion is an
//! explicit error rather than an indefinite wait.

use std::time::Duration;

use reqwest::Client;

use crate::error::{AppError, Result};
use crate::models::{FetchConfig, ForumTraffic, MonthEntry, TrafficResponse};
use crate::utils::http::create_client;
use crate::utils::traffic_url;

/// Client for the platform's per-forum traffic endpoint.
pub struct TrafficClient {
    client: Client,
    config: FetchConfig,
}

impl TrafficClient {
    /// Create a new traffic client with the given fetch configuration.
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = create_client(&config)?;
        Ok(Self { client, config })
    }

    /// Fetch and extract the traffic figures for a single forum.
    pub async fn fetch_traffic(&self, forum: &str) -> Result<ForumTraffic> {
        let url = traffic_url(forum);
        let months = self.fetch_months(&url).await?;
        ForumTraffic::from_months(forum, months)
    }

    /// Fetch the monthly series, retrying on transport or decode failure.
    async fn fetch_months(&self, url: &str) -> Result<Vec<MonthEntry>> {
        let max_attempts = self.config.max_attempts.max(1);
        let mut last_error = String::new();

        for attempt in 1..=max_attempts {
            match self.fetch_months_once(url).await {
                Ok(months) => return Ok(months),
                Err(error) => {
                    last_error = error.to_string();
                    if attempt < max_attempts {
                        let delay = self.backoff_delay(attempt);
                        log::warn!(
                            "Attempt {}/{} for {} failed: {}. Retrying in {:?}",
                            attempt,
                            max_attempts,
                            url,
                            last_error,
                            delay
                        );
                        tokio::time::sleep(delay).await;
                    }
                }
            }
        }

        Err(AppError::RetriesExhausted {
            url: url.to_string(),
            attempts: max_attempts,
            message: last_error,
        })
    }

    async fn fetch_months_once(&self, url: &str) -> Result<Vec<MonthEntry>> {
        let text = self.client.get(url).send().await?.text().await?;
        let response: TrafficResponse = serde_json::from_str(&text)?;
        Ok(response.month)
    }

    /// Delay before the next attempt: base delay doubled per failed attempt.
    fn backoff_delay(&self, attempt: u32) -> Duration {
        let base = self.config.retry_base_delay_secs.max(1);
        Duration::from_secs(base << (attempt - 1).min(6))
    }
}
