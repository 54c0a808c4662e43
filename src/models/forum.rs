//! Forum record data structures.

use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::utils::{forum_url, traffic_url};

/// Traffic figures for a single forum, extracted from the platform's
/// monthly traffic endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForumTraffic {
    /// Link to the traffic endpoint the figures came from
    pub traffic_url: String,

    /// Unique visitors in the most recent period
    pub uniques: u64,

    /// Pageviews in the most recent period
    pub views: u64,

    /// Integer-divided average of the uniques of the two periods
    /// preceding the most recent one. This is the ranking key.
    pub bimonthly_uniques_average: u64,
}

/// A forum together with the traffic data fetched for it.
///
/// Forums on the no-traffic exclusion list carry `traffic: None`; the
/// reports render that case as the literal `N/A`. Either all of the
/// traffic-derived fields are present or none of them are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForumRecord {
    /// Forum identifier, unique within a run
    pub name: String,

    /// Canonical forum link, derived from the name
    pub url: String,

    /// Static description from the roster
    pub description: String,

    /// Traffic figures, absent for excluded forums
    pub traffic: Option<ForumTraffic>,

    /// Powerplay allegiance, assigned only for powerplay forums
    pub allegiance: Option<String>,
}

impl ForumRecord {
    /// Create a record for a forum with no traffic data available.
    pub fn without_traffic(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            url: forum_url(name),
            description: description.to_string(),
            traffic: None,
            allegiance: None,
        }
    }

    /// Create a record carrying fetched traffic figures.
    pub fn with_traffic(name: &str, description: &str, traffic: ForumTraffic) -> Self {
        Self {
            name: name.to_string(),
            url: forum_url(name),
            description: description.to_string(),
            traffic: Some(traffic),
            allegiance: None,
        }
    }

    /// The ranking key, if traffic data is available.
    pub fn average(&self) -> Option<u64> {
        self.traffic.as_ref().map(|t| t.bimonthly_uniques_average)
    }
}

/// One monthly entry from the traffic endpoint:
/// `[epoch, uniques, pageviews, subscription_delta]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MonthEntry(pub i64, pub u64, pub u64, pub i64);

impl MonthEntry {
    pub fn epoch(&self) -> i64 {
        self.0
    }

    pub fn uniques(&self) -> u64 {
        self.1
    }

    pub fn pageviews(&self) -> u64 {
        self.2
    }
}

/// Body of the traffic endpoint response. Only the monthly series is used.
#[derive(Debug, Clone, Deserialize)]
pub struct TrafficResponse {
    pub month: Vec<MonthEntry>,
}

impl ForumTraffic {
    /// Extract traffic figures for a forum from its monthly entries.
    ///
    /// Entries are sorted newest-first before indexing. The platform is
    /// assumed to already return them in that order, but the ordering is
    /// not documented as guaranteed, so it is made explicit here.
    ///
    /// Index 0 is the current period; the average is taken over the two
    /// periods preceding it. Fewer than 3 entries means the endpoint
    /// returned a truncated series and the run cannot produce a ranking.
    pub fn from_months(forum: &str, mut months: Vec<MonthEntry>) -> Result<Self> {
        months.sort_by(|a, b| b.epoch().cmp(&a.epoch()));

        if months.len() < 3 {
            return Err(AppError::traffic(
                forum,
                format!("expected at least 3 monthly entries, got {}", months.len()),
            ));
        }

        Ok(Self {
            traffic_url: traffic_url(forum),
            uniques: months[0].uniques(),
            views: months[0].pageviews(),
            bimonthly_uniques_average: (months[1].uniques() + months[2].uniques()) / 2,
        })
    }
}
