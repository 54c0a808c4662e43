// src/services/messages.rs

//! Private message delivery over the Reddit API.
//!
//! Authentication is the standard script-app flow: exchange the client
//! credentials and account password for a bearer token, then call the
//! compose endpoint per recipient. Send failures are not retried; they
//! propagate and terminate the run.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::models::RedditConfig;

const TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";
const COMPOSE_URL: &str = "https://oauth.reddit.com/api/compose";

/// Destination for the generated report message.
#[async_trait]
pub trait MessageSink {
    /// Send one private message.
    async fn send(&self, recipient: &str, subject: &str, body: &str) -> Result<()>;
}

/// Message sink backed by the Reddit messaging API.
pub struct RedditMessenger {
    client: Client,
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

impl RedditMessenger {
    /// Authenticate a script app and return a ready-to-send messenger.
    pub async fn login(config: &RedditConfig, user_agent: &str) -> Result<Self> {
        let client = Client::builder().user_agent(user_agent).build()?;

        let response = client
            .post(TOKEN_URL)
            .basic_auth(&config.client_id, Some(&config.client_secret))
            .form(&[
                ("grant_type", "password"),
                ("username", config.username.as_str()),
                ("password", config.password.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(AppError::auth(format!(
                "token request returned {}: {}",
                status, text
            )));
        }

        let token: TokenResponse = serde_json::from_str(&text)
            .map_err(|e| AppError::auth(format!("unexpected token response: {}", e)))?;

        Ok(Self {
            client,
            access_token: token.access_token,
        })
    }
}

#[async_trait]
impl MessageSink for RedditMessenger {
    async fn send(&self, recipient: &str, subject: &str, body: &str) -> Result<()> {
        let response = self
            .client
            .post(COMPOSE_URL)
            .bearer_auth(&self.access_token)
            .form(&[
                ("api_type", "json"),
                ("to", recipient),
                ("subject", subject),
                ("text", body),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::send(
                recipient,
                format!("compose returned {}: {}", status, text),
            ));
        }

        log::info!("Sent report to {}", recipient);
        Ok(())
    }
}
