// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Application configuration, loaded from defaults, optional config files
/// and `SCOUTRS__`-prefixed environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub scraper: ScraperSettings,
    pub history: HistorySettings,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScraperSettings {
    /// Page fetches in flight at once.
    pub pool_width: usize,
    /// Per-request timeout in seconds.
    pub request_timeout: u64,
    pub user_agent: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistorySettings {
    /// Number of past query result sets retained.
    pub capacity: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputSettings {
    /// Default CSV output path.
    pub path: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            .set_default("scraper.pool_width", 5)?
            .set_default("scraper.request_timeout", 30)?
            .set_default("scraper.user_agent", DEFAULT_USER_AGENT)?
            .set_default("history.capacity", 10)?
            .set_default("output.path", "jobs.csv")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{env}")).required(false))
            .add_source(Environment::with_prefix("SCOUTRS").separator("__"));

        builder.build()?.try_deserialize()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scraper: ScraperSettings {
                pool_width: 5,
                request_timeout: 30,
                user_agent: DEFAULT_USER_AGENT.to_string(),
            },
            history: HistorySettings { capacity: 10 },
            output: OutputSettings {
                path: "jobs.csv".to_string(),
            },
        }
    }
}
