use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

use crate::error::{Result, StarterError};

pub const DEFAULT_CONFIG_FILE: &str = "starter.json";
pub const DEFAULT_DB_PATH: &str = "./data/app.db";
pub const DB_PATH_ENV: &str = "STARTER_DB_PATH";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub sqlite_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    pub product_name: String,
    pub identifier: String,
    pub version: String,
    pub database: Option<DatabaseConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            product_name: "Desktop Starter".to_string(),
            identifier: "com.example.desktop-starter".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            database: None,
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| StarterError::Config(e.to_string()))?;
        let config: Config =
            serde_json::from_str(&content).map_err(|e| StarterError::Config(e.to_string()))?;
        Ok(config)
    }

    /// Reads `path` when it exists, otherwise starts from defaults, then applies
    /// environment overrides.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config = if path.exists() {
            Self::from_file(path)?
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Self::default()
        };
        Ok(config.with_env_overrides())
    }

    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(value) = env::var(DB_PATH_ENV) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                self.database
                    .get_or_insert_with(DatabaseConfig::default)
                    .sqlite_path = Some(trimmed.to_string());
            }
        }
        self
    }

    pub fn db_path(&self) -> String {
        self.database
            .as_ref()
            .and_then(|db| db.sqlite_path.as_deref())
            .map(str::trim)
            .filter(|path| !path.is_empty())
            .unwrap_or(DEFAULT_DB_PATH)
            .to_string()
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| StarterError::Config(e.to_string()))?;
        fs::write(path.as_ref(), content).map_err(|e| StarterError::Io(e.to_string()))
    }
}

/// Loads `.env` into the process environment. A missing file is not an error.
pub fn load_dotenv() {
    if let Err(err) = dotenv::dotenv() {
        tracing::warn!("Could not load .env file: {err}");
    }
}
