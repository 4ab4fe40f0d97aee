//! Symmetric signing key management

use jsonwebtoken::{DecodingKey, EncodingKey};
use std::sync::Arc;

use jr_shared::config::JwtConfig;

use crate::errors::DomainError;

/// HMAC key shared by signing and verification
///
/// Built once at startup; an absent secret is a configuration fault and
/// no token operation can run without a key.
#[derive(Clone)]
pub struct SigningKey {
    secret: Arc<[u8]>,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl SigningKey {
    /// Create a key from raw secret bytes
    pub fn from_secret(secret: &[u8]) -> Result<Self, DomainError> {
        if secret.is_empty() || secret.iter().all(u8::is_ascii_whitespace) {
            return Err(DomainError::Configuration {
                message: "JWT signing secret is not configured".to_string(),
            });
        }

        Ok(Self {
            secret: Arc::from(secret),
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
        })
    }

    /// Create a key from the validated JWT configuration
    pub fn from_config(config: &JwtConfig) -> Result<Self, DomainError> {
        config.validate().map_err(|e| DomainError::Configuration {
            message: e.to_string(),
        })?;
        Self::from_secret(config.secret.as_bytes())
    }

    /// Raw secret bytes
    pub fn key(&self) -> &[u8] {
        &self.secret
    }

    pub(crate) fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }

    pub(crate) fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKey")
            .field("secret", &"<redacted>")
            .finish()
    }
}
