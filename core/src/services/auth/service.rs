//! Main authentication service implementation

use std::sync::Arc;
use tracing::{error, info, warn};

use jr_shared::types::ApiResponse;

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::UserRecord;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{RefreshTokenStore, UserRepository};
use crate::services::token::TokenService;

use super::verifier::CredentialVerifier;

pub const LOGIN_SUCCESS_MESSAGE: &str = "Authentication success";
pub const RENEW_SUCCESS_MESSAGE: &str = "Renew token success";
pub const LIST_USERS_SUCCESS_MESSAGE: &str = "Users retrieved";
pub const LOGOUT_SUCCESS_MESSAGE: &str = "Logout success";

/// Authentication service exposing login, renewal, listing and logout
pub struct AuthService<S, U, V>
where
    S: RefreshTokenStore,
    U: UserRepository,
    V: CredentialVerifier,
{
    /// Token engine
    token_service: Arc<TokenService<S, U>>,
    /// User repository for the listing
    user_repository: Arc<U>,
    /// Username/password check
    verifier: Arc<V>,
}

impl<S, U, V> AuthService<S, U, V>
where
    S: RefreshTokenStore,
    U: UserRepository,
    V: CredentialVerifier,
{
    pub fn new(
        token_service: Arc<TokenService<S, U>>,
        user_repository: Arc<U>,
        verifier: Arc<V>,
    ) -> Self {
        Self {
            token_service,
            user_repository,
            verifier,
        }
    }

    pub fn token_service(&self) -> &Arc<TokenService<S, U>> {
        &self.token_service
    }

    /// Verify credentials and issue a token pair
    pub async fn login(&self, username: &str, password: &str) -> DomainResult<TokenPair> {
        let user = match self.verifier.verify(username, password).await {
            Ok(user) => user,
            Err(DomainError::Auth(err)) => {
                warn!(username, reason = err.code(), "Login rejected");
                return Err(err.into());
            }
            Err(err) => {
                error!(username, error = %err, "Login failed");
                return Err(err);
            }
        };

        let pair = self.token_service.issue_token(&user).await?;
        info!(user_id = user.id, "User logged in");
        Ok(pair)
    }

    /// Exchange an expired access token and its refresh token for a new pair
    pub async fn renew_token(
        &self,
        access_token: &str,
        refresh_token: &str,
    ) -> DomainResult<TokenPair> {
        self.token_service.renew(access_token, refresh_token).await
    }

    /// All users known to the repository
    pub async fn list_users(&self) -> DomainResult<Vec<UserRecord>> {
        self.user_repository.list_users().await
    }

    /// Revoke every outstanding refresh token of `user_id`
    pub async fn logout(&self, user_id: i64) -> DomainResult<usize> {
        self.token_service.revoke_user_tokens(user_id).await
    }
}

/// Convert a service result into the `{success, message, data}` envelope
///
/// Failures carry [`DomainError::public_message`] and no data.
pub fn envelope<T>(result: DomainResult<T>, success_message: &str) -> ApiResponse<T> {
    match result {
        Ok(data) => ApiResponse::success(success_message, data),
        Err(err) => ApiResponse::failure(err.public_message()),
    }
}
