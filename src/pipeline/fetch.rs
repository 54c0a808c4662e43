// src/pipeline/fetch.rs

//! Traffic fetching pipeline stage.

use crate::error::Result;
use crate::models::{Config, ForumRecord};
use crate::services::TrafficClient;

/// Fetch traffic data for every forum in the roster, one at a time,
/// in roster order.
///
/// Excluded forums skip the network call and carry no traffic data.
/// A truncated monthly series or exhausted retries abort the whole run;
/// a partially fetched roster is never returned.
pub async fn fetch_all(config: &Config, client: &TrafficClient) -> Result<Vec<ForumRecord>> {
    let mut records = Vec::with_capacity(config.forums.len());

    for forum in &config.forums {
        log::info!("Getting data for: {}", forum.name);

        if config.is_excluded(&forum.name) {
            records.push(ForumRecord::without_traffic(
                &forum.name,
                &forum.description,
            ));
            continue;
        }

        let traffic = client.fetch_traffic(&forum.name).await?;
        records.push(ForumRecord::with_traffic(
            &forum.name,
            &forum.description,
            traffic,
        ));
    }

    Ok(records)
}
