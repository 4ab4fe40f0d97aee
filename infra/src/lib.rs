//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for JwtRenew. It provides
//! MySQL implementations of the refresh token store and the user repository
//! defined in `jr_core`, plus connection pool management and schema bootstrap.

// Re-export core types for convenience
pub use jr_core::errors::*;

/// Database module - MySQL implementations using SQLx
pub mod database;

pub use database::{DatabasePool, MySqlRefreshTokenStore, MySqlUserRepository, PoolStatistics};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        match err {
            InfrastructureError::Database(e) => DomainError::StoreUnavailable {
                message: e.to_string(),
            },
            InfrastructureError::Config(message) => DomainError::Configuration { message },
        }
    }
}
