//! In-memory refresh token store

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::token::RefreshTokenRecord;
use crate::errors::{DomainError, TokenError};

use super::r#trait::RefreshTokenStore;

/// Refresh token store backed by a map keyed on the token value
///
/// The conditional update runs under the write lock, which makes it a true
/// compare-and-set across tasks.
#[derive(Clone)]
pub struct InMemoryRefreshTokenStore {
    records: Arc<RwLock<HashMap<String, RefreshTokenRecord>>>,
}

impl InMemoryRefreshTokenStore {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of records held, live or not
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Copy of every record, ordered by issue time
    pub async fn records(&self) -> Vec<RefreshTokenRecord> {
        let records = self.records.read().await;
        let mut all: Vec<RefreshTokenRecord> = records.values().cloned().collect();
        all.sort_by_key(|r| r.issued_at);
        all
    }

    /// Overwrite a stored record; used to stage revoked or used records
    pub async fn replace(&self, record: RefreshTokenRecord) {
        self.records
            .write()
            .await
            .insert(record.token.clone(), record);
    }
}

impl Default for InMemoryRefreshTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RefreshTokenStore for InMemoryRefreshTokenStore {
    async fn insert(&self, record: RefreshTokenRecord) -> Result<(), DomainError> {
        let mut records = self.records.write().await;

        if records.contains_key(&record.token) {
            return Err(TokenError::DuplicateToken.into());
        }

        records.insert(record.token.clone(), record);
        Ok(())
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<RefreshTokenRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records.get(token).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<RefreshTokenRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records.values().find(|r| r.id == id).cloned())
    }

    async fn mark_used_and_revoked(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut records = self.records.write().await;

        match records.values_mut().find(|r| r.id == id) {
            Some(record) if !record.is_used && !record.is_revoked => {
                record.retire();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn revoke_all_for_user(&self, user_id: i64) -> Result<usize, DomainError> {
        let mut records = self.records.write().await;
        let mut count = 0;

        for record in records
            .values_mut()
            .filter(|r| r.user_id == user_id && !r.is_revoked)
        {
            record.is_revoked = true;
            count += 1;
        }

        Ok(count)
    }
}
