use std::path::PathBuf;

use crate::errors::{QuizError, Result};

const DEFAULT_DATABASE_URL: &str = "sqlite:data/quizbook.db";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// High-level application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// TOML file of quizzes loaded into an empty collection at startup.
    pub seed_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed_file: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, falling back to defaults
    /// for unset or blank keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let port = match get("QUIZBOOK_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| QuizError::Config(format!("QUIZBOOK_PORT '{}' is not a valid port: {}", raw, e)))?,
            None => DEFAULT_PORT,
        };

        Ok(AppConfig {
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            host: get("QUIZBOOK_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            seed_file: get("QUIZBOOK_SEED_FILE").map(PathBuf::from),
        })
    }
}
