use serde::{Deserialize, Serialize};
use std::env;

pub const DEFAULT_LISTING_URL: &str = "https://www.mff.se/lag/herr/spelare/";
pub const DEFAULT_ROSTER_PATH: &str = "/lag/herr/spelare/";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.114 Safari/537.36";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScrapingConfig {
    pub listing_url: String,
    /// Path segment a listing anchor must contain to count as a player link.
    pub roster_path: String,
    pub user_agent: String,
    /// Upper bound on detail pages fetched at the same time.
    pub concurrency: usize,
}

impl Default for ScrapingConfig {
    fn default() -> Self {
        Self {
            listing_url: DEFAULT_LISTING_URL.to_string(),
            roster_path: DEFAULT_ROSTER_PATH.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            concurrency: 4,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScraperConfig {
    pub scraping: ScrapingConfig,
    pub server: ServerConfig,
}

impl ScraperConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds a config from defaults, overriding each field whose variable is
    /// present and parses. Invalid values keep the default.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("MFF_LISTING_URL") {
            config.scraping.listing_url = url;
        }
        if let Some(path) = lookup("MFF_ROSTER_PATH") {
            config.scraping.roster_path = path;
        }
        if let Some(user_agent) = lookup("SCRAPER_USER_AGENT") {
            config.scraping.user_agent = user_agent;
        }
        if let Some(concurrency) = lookup("SCRAPER_CONCURRENCY").and_then(|c| c.parse::<usize>().ok()) {
            if concurrency > 0 {
                config.scraping.concurrency = concurrency;
            }
        }
        if let Some(host) = lookup("SERVER_HOST") {
            config.server.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT").and_then(|p| p.parse::<u16>().ok()) {
            config.server.port = port;
        }

        config
    }
}
