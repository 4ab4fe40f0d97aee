mod service_tests;

use std::sync::Arc;

use crate::domain::entities::user::{UserAccount, UserRecord};
use crate::repositories::{InMemoryRefreshTokenStore, InMemoryUserRepository};
use crate::services::auth::{hash_password, AuthService, BcryptCredentialVerifier};
use crate::services::token::{SigningKey, TokenService, TokenServiceConfig};

/// Lowest bcrypt cost, keeps the tests fast
pub(super) const TEST_COST: u32 = 4;

pub(super) const PASSWORD: &str = "correct horse battery staple";

pub(super) type TestAuthService = AuthService<
    InMemoryRefreshTokenStore,
    InMemoryUserRepository,
    BcryptCredentialVerifier<InMemoryUserRepository>,
>;

pub(super) fn users() -> Arc<InMemoryUserRepository> {
    let hash = hash_password(PASSWORD, TEST_COST).unwrap();
    Arc::new(InMemoryUserRepository::with_accounts([
        UserAccount::new(
            UserRecord::new(1, "alice", "Alice Liddell", "alice@example.com"),
            hash.clone(),
        ),
        UserAccount::new(
            UserRecord::new(2, "bob", "Bob Builder", "bob@example.com"),
            hash,
        ),
    ]))
}

pub(super) fn auth_service() -> (TestAuthService, Arc<InMemoryRefreshTokenStore>) {
    let store = Arc::new(InMemoryRefreshTokenStore::new());
    let users = users();
    let token_service = Arc::new(TokenService::new(
        store.clone(),
        users.clone(),
        SigningKey::from_secret(b"auth-service-test-secret").unwrap(),
        TokenServiceConfig::default(),
    ));
    let verifier = Arc::new(BcryptCredentialVerifier::new(users.clone()));

    (AuthService::new(token_service, users, verifier), store)
}
