
use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;

use crate::domain::entities::user::{UserAccount, UserRecord};
use crate::repositories::{InMemoryRefreshTokenStore, InMemoryUserRepository};
use crate::services::token::{ManualClock, SigningKey, TokenService, TokenServiceConfig};

pub(super) const SECRET: &str = "unit-test-signing-secret-with-enough-entropy";

pub(super) fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
}

pub(super) fn alice() -> UserRecord {
    UserRecord::new(7, "alice", "Alice Liddell", "alice@example.com")
}

pub(super) fn signing_key() -> SigningKey {
    SigningKey::from_secret(SECRET.as_bytes()).unwrap()
}

pub(super) struct Harness {
    pub service: TokenService<InMemoryRefreshTokenStore, InMemoryUserRepository>,
    pub store: Arc<InMemoryRefreshTokenStore>,
    pub users: Arc<InMemoryUserRepository>,
    pub clock: Arc<ManualClock>,
}

pub(super) fn harness() -> Harness {
    let store = Arc::new(InMemoryRefreshTokenStore::new());
    let users = Arc::new(InMemoryUserRepository::with_accounts([UserAccount::new(
        alice(),
        "not-used-by-token-tests",
    )]));
    let clock = Arc::new(ManualClock::new(start()));

    let service = TokenService::new(
        store.clone(),
        users.clone(),
        signing_key(),
        TokenServiceConfig::default(),
    )
    .with_clock(clock.clone());

    Harness {
        service,
        store,
        users,
        clock,
    }
}
