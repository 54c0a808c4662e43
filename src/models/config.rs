//! Application configuration structures.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP and retry behavior settings
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Report file naming and placement
    #[serde(default)]
    pub report: ReportConfig,

    /// Messaging API credentials and recipients
    #[serde(default)]
    pub reddit: RedditConfig,

    /// Forum roster, in fetch order
    #[serde(default = "defaults::forums")]
    pub forums: Vec<ForumInfo>,

    /// Powerplay forum subset with allegiances
    #[serde(default = "defaults::powerplay")]
    pub powerplay: Vec<PowerplayInfo>,

    /// Forums whose traffic endpoint is known to be unavailable
    #[serde(default = "defaults::no_traffic")]
    pub no_traffic: Vec<String>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.fetch.user_agent.trim().is_empty() {
            return Err(AppError::validation("fetch.user_agent is empty"));
        }
        if self.fetch.timeout_secs == 0 {
            return Err(AppError::validation("fetch.timeout_secs must be > 0"));
        }
        if self.fetch.max_attempts == 0 {
            return Err(AppError::validation("fetch.max_attempts must be > 0"));
        }
        if self.report.file_prefix.trim().is_empty() {
            return Err(AppError::validation("report.file_prefix is empty"));
        }
        if self.forums.is_empty() {
            return Err(AppError::validation("No forums defined"));
        }

        let names: HashSet<&str> = self.forums.iter().map(|f| f.name.as_str()).collect();
        if names.len() != self.forums.len() {
            return Err(AppError::validation("Duplicate forum names in roster"));
        }
        for pp in &self.powerplay {
            if !names.contains(pp.name.as_str()) {
                return Err(AppError::validation(format!(
                    "Powerplay forum {} is not in the roster",
                    pp.name
                )));
            }
        }
        for name in &self.no_traffic {
            if !names.contains(name.as_str()) {
                return Err(AppError::validation(format!(
                    "Excluded forum {} is not in the roster",
                    name
                )));
            }
        }
        Ok(())
    }

    /// Validate the credentials and recipients needed for message delivery.
    ///
    /// Kept separate from [`Config::validate`] so report-only runs do not
    /// require messaging credentials.
    pub fn validate_for_send(&self) -> Result<()> {
        let reddit = &self.reddit;
        for (value, field) in [
            (&reddit.client_id, "reddit.client_id"),
            (&reddit.client_secret, "reddit.client_secret"),
            (&reddit.username, "reddit.username"),
            (&reddit.password, "reddit.password"),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::validation(format!("{} is empty", field)));
            }
        }
        if reddit.recipients.is_empty() {
            return Err(AppError::validation("No message recipients defined"));
        }
        Ok(())
    }

    /// Whether a forum is on the no-traffic exclusion list.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.no_traffic.iter().any(|n| n == name)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fetch: FetchConfig::default(),
            report: ReportConfig::default(),
            reddit: RedditConfig::default(),
            forums: defaults::forums(),
            powerplay: defaults::powerplay(),
            no_traffic: defaults::no_traffic(),
        }
    }
}

/// HTTP client and retry behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Maximum attempts per traffic request before giving up
    #[serde(default = "defaults::max_attempts")]
    pub max_attempts: u32,

    /// Initial retry delay in seconds, doubled after each failed attempt
    #[serde(default = "defaults::retry_base_delay")]
    pub retry_base_delay_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            max_attempts: defaults::max_attempts(),
            retry_base_delay_secs: defaults::retry_base_delay(),
        }
    }
}

/// Report file naming and placement settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Prefix for the generated report file names
    #[serde(default = "defaults::file_prefix")]
    pub file_prefix: String,

    /// Directory the report files are written into
    #[serde(default = "defaults::output_dir")]
    pub output_dir: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            file_prefix: defaults::file_prefix(),
            output_dir: defaults::output_dir(),
        }
    }
}

/// Messaging API credentials (OAuth2 script app) and recipients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedditConfig {
    /// Script app client id
    #[serde(default)]
    pub client_id: String,

    /// Script app client secret
    #[serde(default)]
    pub client_secret: String,

    /// Account the messages are sent from
    #[serde(default)]
    pub username: String,

    /// Password for that account
    #[serde(default)]
    pub password: String,

    /// Usernames the report is delivered to
    #[serde(default = "defaults::recipients")]
    pub recipients: Vec<String>,
}

impl Default for RedditConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            username: String::new(),
            password: String::new(),
            recipients: defaults::recipients(),
        }
    }
}

/// A forum roster entry: name and the description shown in the reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForumInfo {
    /// Forum identifier (subreddit name)
    pub name: String,

    /// Static description for the report tables
    pub description: String,
}

/// A powerplay forum and the allegiance it reports under.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerplayInfo {
    /// Forum identifier, must also appear in the roster
    pub name: String,

    /// Allegiance shown in the powerplay table
    pub allegiance: String,
}

mod defaults {
    use super::{ForumInfo, PowerplayInfo};

    // Fetch defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (Windows NT 6.1) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/41.0.2228.0 Safari/537.36".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn max_attempts() -> u32 {
        5
    }
    pub fn retry_base_delay() -> u64 {
        2
    }

    // Report defaults
    pub fn file_prefix() -> String {
        "ED_subs".into()
    }
    pub fn output_dir() -> String {
        ".".into()
    }

    // Messaging defaults
    pub fn recipients() -> Vec<String> {
        vec!["Always_SFW".into(), "StuartGT".into()]
    }

    fn forum(name: &str, description: &str) -> ForumInfo {
        ForumInfo {
            name: name.into(),
            description: description.into(),
        }
    }

    // The Elite: Dangerous subreddit roster, in fetch order.
    pub fn forums() -> Vec<ForumInfo> {
        vec![
            forum(
                "EliteOne",
                "A community for playing with other Xbox One CMDRs",
            ),
            forum("EliteTraders", "Everything related to Trading"),
            forum(
                "EliteExplorers",
                "Share useful information, noteworthy discoveries and opportunities for collaboration",
            ),
            forum(
                "EliteMiners",
                "Share tips, hints, guides, refinery locations, and good asteroid locations",
            ),
            forum("EliteBountyHunters", "Everything related to Bounty Hunting"),
            forum(
                "EliteCG",
                "Latest, most accurate, and professionally moderated information on Community Goals",
            ),
            forum(
                "EiteDagerous",
                "The grease trap of the Galaxy - game-related humour and shit-posting",
            ),
            forum(
                "EliteRacers",
                "Player-organized racing community with regular weekend events and races",
            ),
            forum(
                "EliteWings",
                "Where you can find fellow CMDRs to fly with in the harsh galaxy",
            ),
            forum(
                "UnknownArtefact",
                "Discussion, news, and theorizing for the Unknown Artefact and Large Barnacles mysteries",
            ),
            forum(
                "ElitePirates",
                "Meet and congregate, to discuss tactics, news, trade routes, and outfits",
            ),
            forum(
                "FuelRats",
                "Anarchic collective dedicated to rescuing stranded CMDRs that have run out of fuel in-game",
            ),
            forum("EliteAlliance", "Support the Alliance SuperPower"),
            forum(
                "EliteDangerousPics",
                "Have you taken a nice picture in E:D? Post it here",
            ),
            forum(
                "EliteOutfitters",
                "Suggestions and discussions on how to best outfit your ship",
            ),
            forum(
                "EliteCombatLoggers",
                "Videos of logging out to avoid combat/death, and grounds for being put as KoS.",
            ),
            forum(
                "IridiumWing",
                "Escorting explorers in/out of the bubble, to protect their ships and data",
            ),
            forum("EliteCQC", "Everything related to CQC/Arena"),
            forum("EliteStories", "Stories and adventures from the Milky Way"),
            forum("Canonn", "The home of science in the galaxy"),
            forum("EliteMahon", "Edmund Mahon"),
            forum("AislingDuval", "Aisling Duval"),
            forum("EliteLavigny", "Arissa Lavigny-Duval"),
            forum("ElitePatreus", "Denton Patreus"),
            forum("EliteTorval", "Zemina Torval"),
            forum("EliteWinters", "Felicia Winters"),
            forum("EliteHudson", "Zachary Hudson"),
            forum("kumocrew", "Archon Delaine"),
            forum("EliteSirius", "Li Yong-Rui"),
            forum("EliteAntal", "Pranav Antal"),
        ]
    }

    fn power(name: &str, allegiance: &str) -> PowerplayInfo {
        PowerplayInfo {
            name: name.into(),
            allegiance: allegiance.into(),
        }
    }

    // Powerplay subset, reported in its own table.
    pub fn powerplay() -> Vec<PowerplayInfo> {
        vec![
            power("EliteMahon", "Alliance"),
            power("AislingDuval", "Empire"),
            power("EliteLavigny", "Empire"),
            power("ElitePatreus", "Empire"),
            power("EliteTorval", "Empire"),
            power("EliteWinters", "Federation"),
            power("EliteHudson", "Federation"),
            power("kumocrew", "Independent"),
            power("EliteSirius", "Independent"),
            power("EliteAntal", "Independent"),
        ]
    }

    // Forums without a working traffic endpoint.
    pub fn no_traffic() -> Vec<String> {
        vec!["EliteDangerousPics".into()]
    }
}
