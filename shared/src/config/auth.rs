//! Token signing configuration

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Default access token lifetime in seconds
pub const DEFAULT_ACCESS_TOKEN_EXPIRY: i64 = 10;

/// Default refresh token lifetime in seconds
pub const DEFAULT_REFRESH_TOKEN_EXPIRY: i64 = 3600;

/// Upper bound for either lifetime, ten years in seconds
pub const MAX_TOKEN_EXPIRY: i64 = 10 * 365 * 24 * 60 * 60;

/// JWT signing configuration
#[derive(Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Symmetric secret for HMAC-SHA-512 signing
    pub secret: String,

    /// Access token expiry time in seconds
    pub access_token_expiry: i64,

    /// Refresh token expiry time in seconds
    pub refresh_token_expiry: i64,
}

// The secret never appears in debug output.
impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("access_token_expiry", &self.access_token_expiry)
            .field("refresh_token_expiry", &self.refresh_token_expiry)
            .finish()
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            access_token_expiry: DEFAULT_ACCESS_TOKEN_EXPIRY,
            refresh_token_expiry: DEFAULT_REFRESH_TOKEN_EXPIRY,
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    ///
    /// A missing `JWT_SECRET` yields an empty secret, which
    /// [`JwtConfig::validate`] rejects. Lifetimes that are set but not
    /// whole seconds are reported immediately.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = std::env::var("JWT_SECRET").unwrap_or_default();
        let access_token_expiry = parse_expiry(
            "JWT_ACCESS_TOKEN_EXPIRY",
            std::env::var("JWT_ACCESS_TOKEN_EXPIRY").ok(),
            DEFAULT_ACCESS_TOKEN_EXPIRY,
        )?;
        let refresh_token_expiry = parse_expiry(
            "JWT_REFRESH_TOKEN_EXPIRY",
            std::env::var("JWT_REFRESH_TOKEN_EXPIRY").ok(),
            DEFAULT_REFRESH_TOKEN_EXPIRY,
        )?;

        Ok(Self {
            secret,
            access_token_expiry,
            refresh_token_expiry,
        })
    }

    /// Set access token expiry in seconds
    pub fn with_access_expiry_seconds(mut self, seconds: i64) -> Self {
        self.access_token_expiry = seconds;
        self
    }

    /// Set refresh token expiry in seconds
    pub fn with_refresh_expiry_seconds(mut self, seconds: i64) -> Self {
        self.refresh_token_expiry = seconds;
        self
    }

    /// Check the startup requirements of the signing configuration
    ///
    /// The secret must be present and both lifetimes positive, with the
    /// refresh token outliving the access token and neither exceeding
    /// [`MAX_TOKEN_EXPIRY`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret.trim().is_empty() {
            return Err(ConfigError::Missing {
                key: "JWT_SECRET".to_string(),
            });
        }
        if self.access_token_expiry <= 0 {
            return Err(ConfigError::Invalid {
                key: "JWT_ACCESS_TOKEN_EXPIRY".to_string(),
                reason: "must be positive".to_string(),
            });
        }
        if self.refresh_token_expiry > MAX_TOKEN_EXPIRY {
            return Err(ConfigError::Invalid {
                key: "JWT_REFRESH_TOKEN_EXPIRY".to_string(),
                reason: format!("must not exceed {} seconds", MAX_TOKEN_EXPIRY),
            });
        }
        if self.refresh_token_expiry <= self.access_token_expiry {
            return Err(ConfigError::Invalid {
                key: "JWT_REFRESH_TOKEN_EXPIRY".to_string(),
                reason: "must exceed the access token expiry".to_string(),
            });
        }
        Ok(())
    }
}

/// Parse a lifetime variable, falling back to `default` only when unset
fn parse_expiry(key: &str, raw: Option<String>, default: i64) -> Result<i64, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            key: key.to_string(),
            reason: format!("expected whole seconds, got {:?}", value),
        }),
    }
}
