//! User repository traits consumed by the token engine and the credential check.

use async_trait::async_trait;

use crate::domain::entities::user::{UserAccount, UserRecord};
use crate::errors::DomainError;

/// Read access to user records by ID
///
/// This is all the token engine needs to rebuild claims on renewal.
#[async_trait]
pub trait UserLookup: Send + Sync {
    /// Find a user by ID
    ///
    /// # Returns
    /// * `Ok(Some(UserRecord))` - User found
    /// * `Ok(None)` - No user with that ID
    async fn find_by_id(&self, id: i64) -> Result<Option<UserRecord>, DomainError>;
}

/// Full user repository used by login and the user listing
#[async_trait]
pub trait UserRepository: UserLookup {
    /// Find an account, including its password hash, by login name
    async fn find_by_username(&self, username: &str) -> Result<Option<UserAccount>, DomainError>;

    /// All users ordered by ID
    async fn list_users(&self) -> Result<Vec<UserRecord>, DomainError>;
}
