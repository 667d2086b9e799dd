// src/common/config.rs
//! Runtime configuration read from the environment

use chrono::NaiveDate;
use std::env;
use thiserror::Error;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";

/// Largest request body accepted by any route, with or without body logging
pub const MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a valid port number, got '{0}'")]
    InvalidPort(String),

    #[error("ONBOARD_FIXED_TODAY must be a YYYY-MM-DD date, got '{0}'")]
    InvalidFixedToday(String),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub cors_origins: Vec<String>,
    /// Pins the date used by start-date checks instead of the system clock
    pub fixed_today: Option<NaiveDate>,
    pub log_bodies: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            cors_origins: parse_origins(DEFAULT_CORS_ORIGINS),
            fixed_today: None,
            log_bodies: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        let cors_origins = parse_origins(
            &lookup("CORS_ORIGINS").unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string()),
        );

        let fixed_today = match lookup("ONBOARD_FIXED_TODAY") {
            Some(raw) if !raw.trim().is_empty() => Some(
                NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                    .map_err(|_| ConfigError::InvalidFixedToday(raw.clone()))?,
            ),
            _ => None,
        };

        let log_bodies = lookup("LOG_BODIES")
            .unwrap_or_else(|| "false".to_string())
            .to_lowercase()
            == "true";

        Ok(Self {
            port,
            cors_origins,
            fixed_today,
            log_bodies,
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty())
        .collect()
}
