//! Error types for credential checks and the token lifecycle
//!
//! The `Display` text of every variant is the public message returned to
//! clients, so none of them embed token values, secrets or store details.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid username/password")]
    InvalidCredentials,

    #[error("Missing or invalid bearer token")]
    Unauthorized,
}

impl AuthError {
    /// Stable machine-readable code used in logs
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::Unauthorized => "UNAUTHORIZED",
        }
    }
}

/// Token-related errors
///
/// Each variant is one rejection category of the verify/renew pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Invalid token format")]
    Malformed,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Invalid Token")]
    AlgorithmMismatch,

    #[error("Access token has expired")]
    Expired,

    #[error("Access token has not yet expired")]
    PrematureRenewal,

    #[error("Refresh token does not exist")]
    RefreshTokenNotFound,

    #[error("Refresh token has been used")]
    RefreshTokenUsed,

    #[error("Refresh token has been revoked")]
    RefreshTokenRevoked,

    #[error("Refresh token has expired")]
    RefreshTokenExpired,

    #[error("Tokens do not match")]
    TokenBindingMismatch,

    #[error("Token generation failed")]
    DuplicateToken,

    #[error("Something went wrong")]
    RenewalFailed,
}

impl TokenError {
    /// Stable machine-readable code used in logs
    pub fn code(&self) -> &'static str {
        match self {
            TokenError::Malformed => "TOKEN_MALFORMED",
            TokenError::InvalidSignature => "TOKEN_INVALID_SIGNATURE",
            TokenError::AlgorithmMismatch => "TOKEN_ALGORITHM_MISMATCH",
            TokenError::Expired => "TOKEN_EXPIRED",
            TokenError::PrematureRenewal => "TOKEN_PREMATURE_RENEWAL",
            TokenError::RefreshTokenNotFound => "REFRESH_TOKEN_NOT_FOUND",
            TokenError::RefreshTokenUsed => "REFRESH_TOKEN_USED",
            TokenError::RefreshTokenRevoked => "REFRESH_TOKEN_REVOKED",
            TokenError::RefreshTokenExpired => "REFRESH_TOKEN_EXPIRED",
            TokenError::TokenBindingMismatch => "TOKEN_BINDING_MISMATCH",
            TokenError::DuplicateToken => "REFRESH_TOKEN_DUPLICATE",
            TokenError::RenewalFailed => "RENEWAL_FAILED",
        }
    }
}
