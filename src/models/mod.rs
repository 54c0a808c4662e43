// src/models/mod.rs

//! Domain models for the report generator.

mod config;
mod forum;

// Re-export all public types
pub use config::{Config, FetchConfig, ForumInfo, PowerplayInfo, RedditConfig, ReportConfig};
pub use forum::{ForumRecord, ForumTraffic, MonthEntry, TrafficResponse};
