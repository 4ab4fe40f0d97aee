//! Configuration module with business-specific sub-modules
//!
//! - `auth` - signing secret and token lifetimes
//! - `database` - MySQL connection and pool configuration
//! - `environment` - environment detection and logging configuration
//! - `server` - HTTP bind address

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use auth::JwtConfig;
pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::ServerConfig;

/// Configuration faults detected at startup
///
/// Any of these must stop the process before it accepts traffic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required configuration: {key}")]
    Missing { key: String },

    #[error("Invalid configuration value for {key}: {reason}")]
    Invalid { key: String, reason: String },
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Token signing configuration
    pub jwt: JwtConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Only unparseable token lifetimes fail here; call
    /// [`AppConfig::validate`] before starting any service.
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        Ok(Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            jwt: JwtConfig::from_env()?,
            logging: LoggingConfig::from_env(environment),
        })
    }

    /// Validate every section that has startup requirements
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.jwt.validate()?;
        self.database.validate()?;
        Ok(())
    }
}
