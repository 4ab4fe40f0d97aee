//! Main token service implementation

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Utc};
use rand::{rngs::OsRng, RngCore};
use std::sync::Arc;
use tracing::{debug, error, field, info, info_span, warn, Instrument, Span};

use crate::domain::entities::token::{
    AccessTokenClaims, RefreshTokenRecord, TokenPair, REFRESH_TOKEN_BYTES,
};
use crate::domain::entities::user::UserRecord;
use crate::errors::{DomainError, TokenError};
use crate::repositories::{RefreshTokenStore, UserLookup};

use super::clock::{Clock, SystemClock};
use super::codec::{DecodeOptions, TokenCodec};
use super::config::TokenServiceConfig;
use super::signing_key::SigningKey;

/// Verification of bearer access tokens
///
/// Object-safe view of [`TokenService`] for callers that only authenticate
/// requests and do not care about the store types.
pub trait AccessTokenVerifier: Send + Sync {
    fn verify_access_token(&self, token: &str) -> Result<AccessTokenClaims, DomainError>;
}

/// Service issuing, verifying and rotating access/refresh token pairs
///
/// Each access token carries a `jti` that names exactly one refresh token
/// record. Renewal consumes that record through the store's conditional
/// update, so of any number of concurrent renewals with the same pair at
/// most one succeeds.
pub struct TokenService<S: RefreshTokenStore, U: UserLookup> {
    store: Arc<S>,
    users: Arc<U>,
    signing_key: SigningKey,
    config: TokenServiceConfig,
    clock: Arc<dyn Clock>,
}

impl<S: RefreshTokenStore, U: UserLookup> TokenService<S, U> {
    /// Creates a token service reading time from the system clock
    pub fn new(
        store: Arc<S>,
        users: Arc<U>,
        signing_key: SigningKey,
        config: TokenServiceConfig,
    ) -> Self {
        Self {
            store,
            users,
            signing_key,
            config,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the time source
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Issues a fresh token pair for `user`
    ///
    /// Persists a live refresh token record whose `jwt_id` is the `jti` of
    /// the new access token.
    pub async fn issue_token(&self, user: &UserRecord) -> Result<TokenPair, DomainError> {
        let now = self.clock.now();
        self.issue_at(user, now).await
    }

    async fn issue_at(
        &self,
        user: &UserRecord,
        now: DateTime<Utc>,
    ) -> Result<TokenPair, DomainError> {
        let claims = AccessTokenClaims::for_user(user, now, self.config.access_token_ttl)?;
        let access_token = TokenCodec::encode(&claims, &self.signing_key)?;

        let refresh_token = generate_refresh_token();
        let record = RefreshTokenRecord::new(
            claims.jti.clone(),
            user.id,
            refresh_token.clone(),
            now,
            self.config.refresh_token_ttl,
        )?;
        let record_id = record.id;

        self.store.insert(record).await?;

        info!(
            user_id = user.id,
            jti = %claims.jti,
            record_id = %record_id,
            "Issued token pair"
        );
        Ok(TokenPair::new(access_token, refresh_token))
    }

    /// Exchanges an expired access token and its bound refresh token for a new pair
    ///
    /// Rejections come back as [`DomainError::Token`] with the category of
    /// the first failed check. Faults other than store outages are reported
    /// as [`TokenError::RenewalFailed`].
    pub async fn renew(
        &self,
        access_token: &str,
        refresh_token: &str,
    ) -> Result<TokenPair, DomainError> {
        let now = self.clock.now();
        let span = info_span!(
            "token_renewal",
            user_id = field::Empty,
            record_id = field::Empty
        );

        let result = self
            .renew_at(access_token, refresh_token, now)
            .instrument(span.clone())
            .await;

        span.in_scope(|| match result {
            Ok(pair) => Ok(pair),
            Err(err @ DomainError::Token(TokenError::DuplicateToken)) => {
                error!(error = %err, "Token renewal failed");
                Err(TokenError::RenewalFailed.into())
            }
            Err(DomainError::Token(err)) => {
                warn!(reason = err.code(), "Token renewal rejected");
                Err(err.into())
            }
            Err(err @ DomainError::StoreUnavailable { .. }) => {
                error!(error = %err, "Token renewal failed");
                Err(err)
            }
            Err(err) => {
                error!(error = %err, "Token renewal failed");
                Err(TokenError::RenewalFailed.into())
            }
        })
    }

    async fn renew_at(
        &self,
        access_token: &str,
        refresh_token: &str,
        now: DateTime<Utc>,
    ) -> Result<TokenPair, DomainError> {
        let claims = TokenCodec::decode(
            access_token,
            &self.signing_key,
            DecodeOptions::ignoring_lifetime(now),
        )?;
        TokenCodec::ensure_algorithm(access_token)?;

        if !claims.is_expired_at(now) {
            return Err(TokenError::PrematureRenewal.into());
        }

        let record = self
            .store
            .find_by_token(refresh_token)
            .await?
            .ok_or(TokenError::RefreshTokenNotFound)?;

        let span = Span::current();
        span.record("user_id", record.user_id);
        span.record("record_id", field::display(record.id));

        if record.is_used {
            return Err(TokenError::RefreshTokenUsed.into());
        }
        if record.is_revoked {
            return Err(TokenError::RefreshTokenRevoked.into());
        }
        if record.is_expired_at(now) {
            return Err(TokenError::RefreshTokenExpired.into());
        }
        if record.jwt_id != claims.jti {
            return Err(TokenError::TokenBindingMismatch.into());
        }

        // Another renewal may have consumed the record since it was read.
        if !self.store.mark_used_and_revoked(record.id).await? {
            return Err(TokenError::RefreshTokenUsed.into());
        }

        let user = self
            .users
            .find_by_id(record.user_id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("user {}", record.user_id),
            })?;

        let pair = self.issue_at(&user, now).await?;
        debug!("Refresh token rotated");
        Ok(pair)
    }

    /// Verifies a bearer access token, including its lifetime
    pub fn verify_access_token(&self, token: &str) -> Result<AccessTokenClaims, DomainError> {
        let now = self.clock.now();
        let claims = TokenCodec::decode(
            token,
            &self.signing_key,
            DecodeOptions::ignoring_lifetime(now),
        )?;
        TokenCodec::ensure_algorithm(token)?;

        if claims.is_expired_at(now) {
            return Err(TokenError::Expired.into());
        }
        Ok(claims)
    }

    /// Revokes every outstanding refresh token of a user
    pub async fn revoke_user_tokens(&self, user_id: i64) -> Result<usize, DomainError> {
        let revoked = self.store.revoke_all_for_user(user_id).await?;
        info!(user_id, revoked, "Revoked refresh tokens");
        Ok(revoked)
    }
}

impl<S: RefreshTokenStore, U: UserLookup> AccessTokenVerifier for TokenService<S, U> {
    fn verify_access_token(&self, token: &str) -> Result<AccessTokenClaims, DomainError> {
        TokenService::verify_access_token(self, token)
    }
}

/// Generates an opaque refresh token from the OS random source
///
/// 32 random bytes, standard base64 encoded.
pub fn generate_refresh_token() -> String {
    let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    STANDARD.encode(bytes)
}
