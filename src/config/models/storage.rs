//! Storage configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL (sqlite or postgres); derived from `name` when empty
    #[serde(default)]
    pub url: String,
    /// Database name
    #[serde(default = "default_database_name")]
    pub name: String,
    /// Maximum connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            name: default_database_name(),
            max_connections: default_max_connections(),
            connection_timeout: default_connection_timeout(),
        }
    }
}

impl DatabaseConfig {
    /// Apply `DATABASE_URL`, `DB_NAME` and `DB_MAX_CONNECTIONS`
    pub fn apply_env(&mut self) -> Result<()> {
        if let Some(url) = env_var("DATABASE_URL") {
            self.url = url;
        }
        if let Some(name) = env_var("DB_NAME") {
            self.name = name;
        }
        if let Some(max) = env_parse("DB_MAX_CONNECTIONS")? {
            self.max_connections = max;
        }
        Ok(())
    }

    /// Connection string, falling back to a local sqlite file named after the database
    pub fn connection_url(&self) -> String {
        if self.url.is_empty() {
            format!("sqlite://{}.db?mode=rwc", self.name)
        } else {
            self.url.clone()
        }
    }

    /// Validate database configuration
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.url.is_empty() && self.name.trim().is_empty() {
            return Err("Either DATABASE_URL or DB_NAME must be set".to_string());
        }
        if self.max_connections == 0 {
            return Err("Database max_connections cannot be 0".to_string());
        }
        Ok(())
    }
}

fn default_database_name() -> String {
    "lingua".to_string()
}
