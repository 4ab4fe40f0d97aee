//! In-memory user repository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::{UserAccount, UserRecord};
use crate::errors::DomainError;

use super::r#trait::{UserLookup, UserRepository};

/// User repository holding accounts in a map keyed on user ID
#[derive(Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<i64, UserAccount>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Build a repository preloaded with `accounts`
    pub fn with_accounts(accounts: impl IntoIterator<Item = UserAccount>) -> Self {
        let users = accounts
            .into_iter()
            .map(|account| (account.record.id, account))
            .collect();
        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }

    /// Add or replace an account
    pub async fn insert(&self, account: UserAccount) {
        self.users.write().await.insert(account.record.id, account);
    }

    /// Remove an account, returning whether it existed
    pub async fn remove(&self, id: i64) -> bool {
        self.users.write().await.remove(&id).is_some()
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserLookup for InMemoryUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<UserRecord>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).map(|account| account.record.clone()))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<UserAccount>, DomainError> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|account| account.record.username == username)
            .cloned())
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>, DomainError> {
        let users = self.users.read().await;
        let mut records: Vec<UserRecord> = users.values().map(|a| a.record.clone()).collect();
        records.sort_by_key(|r| r.id);
        Ok(records)
    }
}
