//! User route handlers
//!
//! This module contains the user-facing endpoints:
//! - Login with username/password
//! - Token renewal
//! - Logout
//! - User listing

pub mod list;
pub mod login;
pub mod logout;
pub mod renew_token;

use std::sync::Arc;

use jr_core::repositories::{RefreshTokenStore, UserRepository};
use jr_core::services::auth::{AuthService, CredentialVerifier};

pub use list::list_users;
pub use login::login;
pub use logout::logout;
pub use renew_token::renew_token;

/// Application state shared by the user handlers
pub struct AppState<S, U, V>
where
    S: RefreshTokenStore,
    U: UserRepository,
    V: CredentialVerifier,
{
    pub auth_service: Arc<AuthService<S, U, V>>,
}

impl<S, U, V> AppState<S, U, V>
where
    S: RefreshTokenStore,
    U: UserRepository,
    V: CredentialVerifier,
{
    pub fn new(auth_service: Arc<AuthService<S, U, V>>) -> Self {
        Self { auth_service }
    }
}
