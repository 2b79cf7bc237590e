//! Aggregation configuration loaded from environment variables.
//!
//! The sport channel name is deliberately configuration rather than a
//! process-wide constant, so embedding applications and tests can aggregate
//! arbitrary channels.

use std::env;

/// Channel name used when nothing else is configured.
pub const DEFAULT_SPORT_CHANNEL: &str = "Sport";

/// Aggregation configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct StatsConfig {
    /// Channel whose entries feed the sport aggregations
    pub sport_channel: String,
}

impl Default for StatsConfig {
    /// Default config targeting the standard sport channel.
    fn default() -> Self {
        Self {
            sport_channel: DEFAULT_SPORT_CHANNEL.to_string(),
        }
    }
}

impl StatsConfig {
    /// Config aggregating the given channel.
    pub fn new(sport_channel: impl Into<String>) -> Self {
        Self {
            sport_channel: sport_channel.into(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Embedding applications that manage their own settings should prefer
    /// [`StatsConfig::new`].
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            sport_channel: env::var("SPORT_CHANNEL")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("SPORT_CHANNEL"))?,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
