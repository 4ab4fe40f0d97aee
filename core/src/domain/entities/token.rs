//! Token entities for the access/refresh token lifecycle.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::UserRecord;
use crate::errors::DomainError;

/// Number of random bytes behind every refresh token (44 characters once base64 encoded)
pub const REFRESH_TOKEN_BYTES: usize = 32;

/// Claims carried in the access token payload
///
/// The wire names follow the established claim set consumed by existing
/// clients: `unique_name` holds the full name and `UserName`/`Id` carry the
/// account identity. `Id` is a decimal string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    /// Subject (user ID as a decimal string)
    pub sub: String,

    /// User's email address
    pub email: String,

    /// User's full name
    #[serde(rename = "unique_name")]
    pub full_name: String,

    /// Login name
    #[serde(rename = "UserName")]
    pub username: String,

    /// Numeric user ID as a string
    #[serde(rename = "Id")]
    pub id: String,

    /// JWT ID, binds this token to exactly one refresh token record
    pub jti: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl AccessTokenClaims {
    /// Creates claims for `user` issued at `issued_at` with a fresh JWT ID
    pub fn for_user(
        user: &UserRecord,
        issued_at: DateTime<Utc>,
        lifetime: Duration,
    ) -> Result<Self, DomainError> {
        let expiry = expiry_after(issued_at, lifetime)?;

        Ok(Self {
            sub: user.id.to_string(),
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            username: user.username.clone(),
            id: user.id.to_string(),
            jti: Uuid::new_v4().to_string(),
            iat: issued_at.timestamp(),
            exp: expiry.timestamp(),
        })
    }

    /// Parses the `Id` claim back into a user ID
    pub fn user_id(&self) -> Option<i64> {
        self.id.parse().ok()
    }

    /// Expiry instant of the token
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }

    /// A token is expired once `exp` is at or before `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.exp <= now.timestamp()
    }
}

/// `issued_at + lifetime`, or an internal error when the sum leaves chrono's range
fn expiry_after(
    issued_at: DateTime<Utc>,
    lifetime: Duration,
) -> Result<DateTime<Utc>, DomainError> {
    issued_at
        .checked_add_signed(lifetime)
        .ok_or_else(|| DomainError::Internal {
            message: format!(
                "Token lifetime of {}s overflows the expiry instant",
                lifetime.num_seconds()
            ),
        })
}

/// Server-side record backing one refresh token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshTokenRecord {
    /// Record identifier
    pub id: Uuid,

    /// `jti` of the access token issued alongside this refresh token
    pub jwt_id: String,

    /// Owning user
    pub user_id: i64,

    /// Opaque refresh token value
    pub token: String,

    /// Set once the token has been consumed by a renewal
    pub is_used: bool,

    /// Set once the token has been invalidated
    pub is_revoked: bool,

    /// Issue instant
    pub issued_at: DateTime<Utc>,

    /// Expiry instant
    pub expires_at: DateTime<Utc>,
}

impl RefreshTokenRecord {
    /// Creates a fresh, live record
    pub fn new(
        jwt_id: impl Into<String>,
        user_id: i64,
        token: impl Into<String>,
        issued_at: DateTime<Utc>,
        lifetime: Duration,
    ) -> Result<Self, DomainError> {
        let expires_at = expiry_after(issued_at, lifetime)?;

        Ok(Self {
            id: Uuid::new_v4(),
            jwt_id: jwt_id.into(),
            user_id,
            token: token.into(),
            is_used: false,
            is_revoked: false,
            issued_at,
            expires_at,
        })
    }

    /// A record is expired once `expires_at` is at or before `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    /// Whether the record can still be exchanged by a renewal
    pub fn is_live_at(&self, now: DateTime<Utc>) -> bool {
        !self.is_used && !self.is_revoked && !self.is_expired_at(now)
    }

    /// Marks the record consumed; the flags never return to false
    pub fn retire(&mut self) {
        self.is_used = true;
        self.is_revoked = true;
    }
}

/// Access token and refresh token returned to the client
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    /// Signed JWT access token
    pub access_token: String,

    /// Opaque refresh token
    pub refresh_token: String,
}

impl TokenPair {
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }
}

// Token values stay out of debug output.
impl std::fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenPair")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/token_tests.rs"]
mod tests;
