//! Configuration for the token service

use chrono::Duration;

use jr_shared::config::auth::{DEFAULT_ACCESS_TOKEN_EXPIRY, DEFAULT_REFRESH_TOKEN_EXPIRY};
use jr_shared::config::JwtConfig;

use crate::errors::DomainError;

/// Token lifetimes used by the token service
#[derive(Debug, Clone, Copy)]
pub struct TokenServiceConfig {
    /// Access token lifetime
    pub access_token_ttl: Duration,
    /// Refresh token lifetime
    pub refresh_token_ttl: Duration,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            access_token_ttl: Duration::seconds(DEFAULT_ACCESS_TOKEN_EXPIRY),
            refresh_token_ttl: Duration::seconds(DEFAULT_REFRESH_TOKEN_EXPIRY),
        }
    }
}

/// Lifetimes are only converted after [`JwtConfig::validate`] has bounded them
impl TryFrom<&JwtConfig> for TokenServiceConfig {
    type Error = DomainError;

    fn try_from(config: &JwtConfig) -> Result<Self, Self::Error> {
        config.validate().map_err(|e| DomainError::Configuration {
            message: e.to_string(),
        })?;

        Ok(Self {
            access_token_ttl: Duration::seconds(config.access_token_expiry),
            refresh_token_ttl: Duration::seconds(config.refresh_token_expiry),
        })
    }
}
