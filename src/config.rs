use std::env;

pub const DEFAULT_API_URL: &str = "https://forkify-api.herokuapp.com/api";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://forkful.db";
pub const DEFAULT_LOG_FILE: &str = "forkful.log";

/// Runtime settings, read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base_url: String,
    pub database_url: String,
    pub log_file: String,
}

impl Config {
    /// Load a `.env` file if present, then read settings from the environment
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from any key lookup, falling back to defaults for
    /// missing or blank values
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str, default: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            api_base_url: read("FORKFUL_API_URL", DEFAULT_API_URL),
            database_url: read("FORKFUL_DATABASE_URL", DEFAULT_DATABASE_URL),
            log_file: read("FORKFUL_LOG_FILE", DEFAULT_LOG_FILE),
        }
    }
}
