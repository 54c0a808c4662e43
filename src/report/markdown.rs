// src/report/markdown.rs

//! Markdown report writers.
//!
//! Pipe-delimited tables in the platform's Markdown dialect: a header row,
//! a `:-:` alignment row, then one data row per forum. Each table ends with
//! a blank line.

use crate::models::ForumRecord;

const NOT_AVAILABLE: &str = "N/A";

/// Link-formatted forum name: `[/r/Name](url)`.
fn name_link(record: &ForumRecord) -> String {
    format!("[/r/{}]({})", record.name, record.url)
}

/// Link-formatted popularity figure, or `N/A` when no traffic is available.
fn popularity_link(record: &ForumRecord) -> String {
    match &record.traffic {
        Some(traffic) => format!(
            "[{}]({})",
            traffic.bimonthly_uniques_average, traffic.traffic_url
        ),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Render the general report table, one row per record in the given order.
pub fn general_table(records: &[ForumRecord]) -> String {
    let mut out = String::new();
    out.push_str("Subreddit|Description|Popularity\n");
    out.push_str(":-:|:-:|:-:\n");
    for record in records {
        out.push_str(&format!(
            "{}|{}|{}\n",
            name_link(record),
            record.description,
            popularity_link(record)
        ));
    }
    out.push('\n');
    out
}

/// Render the powerplay report table with the extra allegiance column.
pub fn powerplay_table(records: &[ForumRecord]) -> String {
    let mut out = String::new();
    out.push_str("SuperPower|Power|Subreddit|Popularity\n");
    out.push_str(":-:|:-:|:-:|:-:\n");
    for record in records {
        out.push_str(&format!(
            "{}|{}|{}|{}\n",
            record.allegiance.as_deref().unwrap_or(NOT_AVAILABLE),
            record.description,
            name_link(record),
            popularity_link(record)
        ));
    }
    out.push('\n');
    out
}
