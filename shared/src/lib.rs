//! Shared configuration and common types for the JwtRenew server
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - The `{success, message, data}` response envelope

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, ConfigError, DatabaseConfig, Environment, JwtConfig, LogFormat, LoggingConfig,
    ServerConfig,
};
pub use types::ApiResponse;
