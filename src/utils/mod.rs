//! Utility functions and helpers.

pub mod http;

/// Canonical link for a forum.
pub fn forum_url(name: &str) -> String {
    format!("https://www.reddit.com/r/{}", name)
}

/// Link to a forum's traffic endpoint.
pub fn traffic_url(name: &str) -> String {
    format!("https://www.reddit.com/r/{}/about/traffic/.json", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forum_url() {
        assert_eq!(forum_url("EliteOne"), "https://www.reddit.com/r/EliteOne");
    }

    #[test]
    fn test_traffic_url() {
        assert_eq!(
            traffic_url("FuelRats"),
            "https://www.reddit.com/r/FuelRats/about/traffic/.json"
        );
    }
}
