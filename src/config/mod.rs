//! Configuration module for the PhotoQuest backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;

use crate::errors::AppError;
use crate::models::PhotoAuthor;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Emit logs as JSON lines instead of human-readable text
    pub log_json: bool,
    /// ID stamped on photos posted through this server
    pub user_id: String,
    /// Display name stamped on photos posted through this server
    pub user_name: String,
    /// Load the compiled-in fixtures at startup
    pub seed_fixtures: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("PHOTOQUEST_BIND_ADDR")
            .unwrap_or_else(|| "127.0.0.1:8080".to_string())
            .parse()
            .map_err(|e| AppError::Internal(format!("Invalid PHOTOQUEST_BIND_ADDR: {}", e)))?;

        let log_level = lookup("PHOTOQUEST_LOG_LEVEL").unwrap_or_else(|| "info".to_string());
        let log_json = lookup("PHOTOQUEST_LOG_FORMAT")
            .map(|format| format.trim().eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        let user_id = lookup("PHOTOQUEST_USER_ID").unwrap_or_else(|| "currentUser".to_string());
        let user_name = lookup("PHOTOQUEST_USER_NAME").unwrap_or_else(|| "Вы".to_string());

        let seed_fixtures = match lookup("PHOTOQUEST_SEED_FIXTURES") {
            Some(value) => !matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "false" | "0" | "no" | "off"
            ),
            None => true,
        };

        Ok(Self {
            bind_addr,
            log_level,
            log_json,
            user_id,
            user_name,
            seed_fixtures,
        })
    }

    /// Author of photos posted through this server.
    pub fn author(&self) -> PhotoAuthor {
        PhotoAuthor::new(self.user_id.clone(), self.user_name.clone())
    }
}
