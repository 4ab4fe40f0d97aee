//! Username/password verification against stored bcrypt hashes

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::entities::user::UserRecord;
use crate::errors::{AuthError, DomainError};
use crate::repositories::UserRepository;

/// Checks a username/password pair and returns the matching user
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// # Returns
    /// * `Ok(UserRecord)` - Credentials are valid
    /// * `Err(DomainError::Auth(AuthError::InvalidCredentials))` - Unknown user or wrong password
    async fn verify(&self, username: &str, password: &str) -> Result<UserRecord, DomainError>;
}

/// Credential verifier backed by bcrypt hashes from a [`UserRepository`]
pub struct BcryptCredentialVerifier<U: UserRepository> {
    user_repository: Arc<U>,
}

impl<U: UserRepository> BcryptCredentialVerifier<U> {
    pub fn new(user_repository: Arc<U>) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl<U: UserRepository> CredentialVerifier for BcryptCredentialVerifier<U> {
    async fn verify(&self, username: &str, password: &str) -> Result<UserRecord, DomainError> {
        let account = match self.user_repository.find_by_username(username).await? {
            Some(account) => account,
            None => return Err(AuthError::InvalidCredentials.into()),
        };

        let hash = account.password_hash.clone();
        let password = password.to_owned();

        // bcrypt is CPU-bound; keep it off the async workers.
        let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Password verification task failed: {}", e),
            })?
            .map_err(|e| DomainError::Internal {
                message: format!("Stored password hash is unusable: {}", e),
            })?;

        if !matches {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(account.record)
    }
}

/// Hash a password with bcrypt at the given cost
pub fn hash_password(password: &str, cost: u32) -> Result<String, DomainError> {
    bcrypt::hash(password, cost).map_err(|e| DomainError::Internal {
        message: format!("Failed to hash password: {}", e),
    })
}
