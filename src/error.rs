// src/error.rs

//! Unified error handling for the report generator.

use std::fmt;

use thiserror::Error;

/// Result type alias for report operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// CSV writing failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Traffic data could not be extracted for a forum
    #[error("Traffic error for r/{forum}: {message}")]
    Traffic { forum: String, message: String },

    /// All retry attempts for a request were exhausted
    #[error("Gave up on {url} after {attempts} attempts: {message}")]
    RetriesExhausted {
        url: String,
        attempts: u32,
        message: String,
    },

    /// Messaging API authentication failed
    #[error("Auth error: {0}")]
    Auth(String),

    /// Private message delivery failed
    #[error("Send error for {recipient}: {message}")]
    Send { recipient: String, message: String },
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a traffic extraction error for a forum.
    pub fn traffic(forum: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Traffic {
            forum: forum.into(),
            message: message.to_string(),
        }
    }

    /// Create an authentication error.
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }

    /// Create a send error for a recipient.
    pub fn send(recipient: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Send {
            recipient: recipient.into(),
            message: message.to_string(),
        }
    }
}
