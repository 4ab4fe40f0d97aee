//! Access token encoding and decoding

use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, decode_header, encode, Algorithm, Header, Validation};

use crate::domain::entities::token::AccessTokenClaims;
use crate::errors::{DomainError, TokenError};

use super::signing_key::SigningKey;

/// The only algorithm access tokens are signed with
pub const SIGNING_ALGORITHM: Algorithm = Algorithm::HS512;

/// Options for [`TokenCodec::decode`]
#[derive(Debug, Clone, Copy)]
pub struct DecodeOptions {
    /// Reject tokens whose `exp` is at or before `now`
    pub check_lifetime: bool,
    /// Instant used for the lifetime check
    pub now: DateTime<Utc>,
}

impl DecodeOptions {
    /// Full validation against `now`
    pub fn checked(now: DateTime<Utc>) -> Self {
        Self {
            check_lifetime: true,
            now,
        }
    }

    /// Signature and structure only; an expired token still decodes
    pub fn ignoring_lifetime(now: DateTime<Utc>) -> Self {
        Self {
            check_lifetime: false,
            now,
        }
    }
}

/// Stateless encoder/decoder for access tokens
pub struct TokenCodec;

impl TokenCodec {
    /// Sign `claims` with HMAC-SHA-512 into a compact JWS
    pub fn encode(claims: &AccessTokenClaims, key: &SigningKey) -> Result<String, DomainError> {
        let header = Header::new(SIGNING_ALGORITHM);
        encode(&header, claims, key.encoding_key()).map_err(|e| DomainError::Internal {
            message: format!("Failed to sign access token: {}", e),
        })
    }

    /// Verify the signature and decode the claims of `token`
    ///
    /// Any HMAC variant is accepted here so that a correctly signed token
    /// with the wrong algorithm decodes; callers reject it afterwards with
    /// [`TokenCodec::ensure_algorithm`]. Issuer and audience are not checked
    /// and there is no clock skew allowance.
    pub fn decode(
        token: &str,
        key: &SigningKey,
        options: DecodeOptions,
    ) -> Result<AccessTokenClaims, TokenError> {
        let mut validation = Validation::new(SIGNING_ALGORITHM);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.required_spec_claims = ["exp".to_string()].into_iter().collect();

        let data = decode::<AccessTokenClaims>(token, key.decoding_key(), &validation)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                ErrorKind::InvalidAlgorithm => TokenError::AlgorithmMismatch,
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed,
            })?;

        if options.check_lifetime && data.claims.is_expired_at(options.now) {
            return Err(TokenError::Expired);
        }

        Ok(data.claims)
    }

    /// Algorithm declared in the token header
    pub fn algorithm_of(token: &str) -> Result<Algorithm, TokenError> {
        decode_header(token)
            .map(|header| header.alg)
            .map_err(|_| TokenError::Malformed)
    }

    /// Reject tokens whose header declares anything but HS512
    pub fn ensure_algorithm(token: &str) -> Result<(), TokenError> {
        if Self::algorithm_of(token)? != SIGNING_ALGORITHM {
            return Err(TokenError::AlgorithmMismatch);
        }
        Ok(())
    }
}
