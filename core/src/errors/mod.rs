//! Domain-specific error types and error handling.

mod types;

pub use types::{AuthError, TokenError};

use thiserror::Error;

/// Message returned to clients for faults that must not be described
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong";

/// Message returned to clients when the backing store cannot be reached
pub const STORE_UNAVAILABLE_MESSAGE: &str = "Service temporarily unavailable";

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Store unavailable: {message}")]
    StoreUnavailable { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Message safe to hand to a client
    ///
    /// Business rejections keep their own message; every other fault
    /// collapses to a fixed text so internals never leak.
    pub fn public_message(&self) -> String {
        match self {
            DomainError::Auth(err) => err.to_string(),
            DomainError::Token(err) => err.to_string(),
            DomainError::StoreUnavailable { .. } => STORE_UNAVAILABLE_MESSAGE.to_string(),
            DomainError::Configuration { .. }
            | DomainError::NotFound { .. }
            | DomainError::Internal { .. } => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }

    /// Whether this is a fault rather than an expected business rejection
    pub fn is_unexpected(&self) -> bool {
        match self {
            DomainError::Auth(_) => false,
            DomainError::Token(err) => {
                matches!(err, TokenError::RenewalFailed | TokenError::DuplicateToken)
            }
            _ => true,
        }
    }

    /// Stable machine-readable code used in logs
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::Configuration { .. } => "CONFIGURATION_FAULT",
            DomainError::StoreUnavailable { .. } => "STORE_UNAVAILABLE",
            DomainError::NotFound { .. } => "NOT_FOUND",
            DomainError::Internal { .. } => "INTERNAL_ERROR",
            DomainError::Auth(err) => err.code(),
            DomainError::Token(err) => err.code(),
        }
    }
}
