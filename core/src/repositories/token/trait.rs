//! Refresh token store trait defining the persistence contract of the token engine.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::token::RefreshTokenRecord;
use crate::errors::DomainError;

/// Persistence operations for refresh token records
///
/// Every operation is atomic per record. Records are never deleted by the
/// engine; a consumed record stays behind with both flags set.
///
/// # Concurrency
/// [`RefreshTokenStore::mark_used_and_revoked`] is the single point that
/// decides which of several concurrent renewals wins. Implementations must
/// perform the check and the flag update as one step.
#[async_trait]
pub trait RefreshTokenStore: Send + Sync {
    /// Persist a new record
    ///
    /// # Returns
    /// * `Ok(())` - Record stored
    /// * `Err(DomainError::Token(TokenError::DuplicateToken))` - Token value already present
    /// * `Err(DomainError::StoreUnavailable)` - Backend failure
    async fn insert(&self, record: RefreshTokenRecord) -> Result<(), DomainError>;

    /// Look a record up by its exact opaque token value
    async fn find_by_token(&self, token: &str) -> Result<Option<RefreshTokenRecord>, DomainError>;

    /// Look a record up by its identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<RefreshTokenRecord>, DomainError>;

    /// Retire a record if it is still live
    ///
    /// Sets `is_used` and `is_revoked` only when both are currently false.
    ///
    /// # Returns
    /// * `Ok(true)` - This call retired the record
    /// * `Ok(false)` - The record was already inert or does not exist
    async fn mark_used_and_revoked(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Revoke every live record of a user, returning how many changed
    async fn revoke_all_for_user(&self, user_id: i64) -> Result<usize, DomainError>;
}
