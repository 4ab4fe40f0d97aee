//! Unit tests for the authentication service

use jr_shared::types::ApiResponse;

use super::{auth_service, PASSWORD};
use crate::errors::{AuthError, DomainError, TokenError};
use crate::services::auth::{envelope, LOGIN_SUCCESS_MESSAGE, RENEW_SUCCESS_MESSAGE};

#[tokio::test]
async fn test_login_issues_pair() {
    let (service, store) = auth_service();

    let pair = service.login("alice", PASSWORD).await.unwrap();
    let claims = service
        .token_service()
        .verify_access_token(&pair.access_token)
        .unwrap();

    assert_eq!(claims.username, "alice");
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_failed_login_issues_nothing() {
    let (service, store) = auth_service();

    let err = service.login("alice", "nope").await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::InvalidCredentials)));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_login_envelope() {
    let (service, _) = auth_service();

    let ok = envelope(service.login("bob", PASSWORD).await, LOGIN_SUCCESS_MESSAGE);
    assert!(ok.success);
    assert_eq!(ok.message, "Authentication success");
    assert!(ok.data.is_some());

    let rejected = envelope(service.login("bob", "bad").await, LOGIN_SUCCESS_MESSAGE);
    assert_eq!(
        rejected,
        ApiResponse::failure("Invalid username/password")
    );
}

#[tokio::test]
async fn test_premature_renewal_envelope() {
    let (service, _) = auth_service();
    let pair = service.login("alice", PASSWORD).await.unwrap();

    let result = service
        .renew_token(&pair.access_token, &pair.refresh_token)
        .await;
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::PrematureRenewal))
    ));

    let response = envelope(result, RENEW_SUCCESS_MESSAGE);
    assert!(!response.success);
    assert_eq!(response.message, "Access token has not yet expired");
    assert!(response.data.is_none());
}

#[tokio::test]
async fn test_list_users() {
    let (service, _) = auth_service();
    let users = service.list_users().await.unwrap();

    let names: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["alice", "bob"]);
}

#[tokio::test]
async fn test_logout_revokes_outstanding_tokens() {
    let (service, store) = auth_service();
    service.login("alice", PASSWORD).await.unwrap();
    service.login("alice", PASSWORD).await.unwrap();
    service.login("bob", PASSWORD).await.unwrap();

    assert_eq!(service.logout(1).await.unwrap(), 2);

    let live: Vec<i64> = store
        .records()
        .await
        .into_iter()
        .filter(|r| !r.is_revoked)
        .map(|r| r.user_id)
        .collect();
    assert_eq!(live, vec![2]);
}
