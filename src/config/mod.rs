//! Configuration Module
//!
//! Env-driven configuration for the server, database pool, token signing,
//! and password hashing. Required variables missing at startup produce a
//! typed error and abort; nothing is lazily resolved per-request.

use thiserror::Error;

use crate::database::DatabaseConfig;
use crate::utils::security::DEFAULT_BCRYPT_COST;

/// Environment variable helpers
pub mod env {
    use std::env;

    /// Get environment variable as string with default
    pub fn get_string(key: &str, default: &str) -> String {
        env::var(key).unwrap_or_else(|_| default.to_string())
    }

    /// Get environment variable as u16 with default
    pub fn get_u16(key: &str, default: u16) -> u16 {
        env::var(key)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Get environment variable as u32 with default
    pub fn get_u32(key: &str, default: u32) -> u32 {
        env::var(key)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Required environment variable {0} is not set")]
    MissingVariable(&'static str),

    #[error("Invalid value for {variable}: {reason}")]
    InvalidValue {
        variable: &'static str,
        reason: String,
    },
}

/// Application configuration combining all service configurations
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub bcrypt_cost: u32,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Token signing configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
}

impl AppConfig {
    /// Load configuration from the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let database = DatabaseConfig::from_env()
            .map_err(|_| ConfigError::MissingVariable("DATABASE_URL"))?;

        let secret = std::env::var("JWT_SECRET")
            .map_err(|_| ConfigError::MissingVariable("JWT_SECRET"))?;

        Ok(Self {
            server: ServerConfig {
                host: env::get_string("SERVER_HOST", "0.0.0.0"),
                port: env::get_u16("SERVER_PORT", 3000),
            },
            database,
            jwt: JwtConfig { secret },
            bcrypt_cost: env::get_u32("BCRYPT_COST", DEFAULT_BCRYPT_COST),
        })
    }

    /// Sanity-check loaded values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt.secret.is_empty() {
            return Err(ConfigError::InvalidValue {
                variable: "JWT_SECRET",
                reason: "must not be empty".to_string(),
            });
        }

        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                variable: "BCRYPT_COST",
                reason: format!("{} is outside the bcrypt range 4..=31", self.bcrypt_cost),
            });
        }

        Ok(())
    }
}
