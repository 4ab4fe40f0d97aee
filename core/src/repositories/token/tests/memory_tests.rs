//! Tests for the in-memory refresh token store

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::token::RefreshTokenRecord;
use crate::errors::{DomainError, TokenError};
use crate::repositories::token::{InMemoryRefreshTokenStore, RefreshTokenStore};

fn record(token: &str, user_id: i64) -> RefreshTokenRecord {
    RefreshTokenRecord::new(
        Uuid::new_v4().to_string(),
        user_id,
        token,
        Utc::now(),
        Duration::hours(1),
    )
    .unwrap()
}

#[tokio::test]
async fn test_insert_and_find() {
    let store = InMemoryRefreshTokenStore::new();
    let saved = record("token-a", 1);
    store.insert(saved.clone()).await.unwrap();

    let by_token = store.find_by_token("token-a").await.unwrap();
    assert_eq!(by_token, Some(saved.clone()));

    let by_id = store.find_by_id(saved.id).await.unwrap();
    assert_eq!(by_id, Some(saved));

    assert!(store.find_by_token("token-b").await.unwrap().is_none());
    assert!(store.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_lookup_is_exact_match() {
    let store = InMemoryRefreshTokenStore::new();
    store.insert(record("AbC123==", 1)).await.unwrap();

    assert!(store.find_by_token("abc123==").await.unwrap().is_none());
    assert!(store.find_by_token("AbC123").await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_token_rejected() {
    let store = InMemoryRefreshTokenStore::new();
    store.insert(record("dup", 1)).await.unwrap();

    let result = store.insert(record("dup", 2)).await;
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::DuplicateToken))
    ));
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_mark_used_and_revoked_applies_once() {
    let store = InMemoryRefreshTokenStore::new();
    let saved = record("token-a", 1);
    store.insert(saved.clone()).await.unwrap();

    assert!(store.mark_used_and_revoked(saved.id).await.unwrap());
    assert!(!store.mark_used_and_revoked(saved.id).await.unwrap());

    let stored = store.find_by_id(saved.id).await.unwrap().unwrap();
    assert!(stored.is_used);
    assert!(stored.is_revoked);
}

#[tokio::test]
async fn test_mark_on_revoked_record_is_noop() {
    let store = InMemoryRefreshTokenStore::new();
    let mut revoked = record("token-a", 1);
    revoked.is_revoked = true;
    store.insert(revoked.clone()).await.unwrap();

    assert!(!store.mark_used_and_revoked(revoked.id).await.unwrap());
    let stored = store.find_by_id(revoked.id).await.unwrap().unwrap();
    assert!(!stored.is_used);

    assert!(!store.mark_used_and_revoked(Uuid::new_v4()).await.unwrap());
}

#[tokio::test]
async fn test_revoke_all_for_user() {
    let store = InMemoryRefreshTokenStore::new();
    store.insert(record("a", 1)).await.unwrap();
    store.insert(record("b", 1)).await.unwrap();
    store.insert(record("c", 2)).await.unwrap();

    assert_eq!(store.revoke_all_for_user(1).await.unwrap(), 2);
    assert_eq!(store.revoke_all_for_user(1).await.unwrap(), 0);

    let other = store.find_by_token("c").await.unwrap().unwrap();
    assert!(!other.is_revoked);
}
