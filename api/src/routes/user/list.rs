use actix_web::{web, HttpResponse};

use jr_core::repositories::{RefreshTokenStore, UserRepository};
use jr_core::services::auth::{CredentialVerifier, LIST_USERS_SUCCESS_MESSAGE};

use crate::handlers::respond;
use crate::middleware::AuthContext;

use super::AppState;

/// Handler for GET /api/user
///
/// Requires `Authorization: Bearer {access_token}`.
pub async fn list_users<S, U, V>(
    state: web::Data<AppState<S, U, V>>,
    auth: AuthContext,
) -> HttpResponse
where
    S: RefreshTokenStore + 'static,
    U: UserRepository + 'static,
    V: CredentialVerifier + 'static,
{
    tracing::debug!(user_id = auth.user_id, "Listing users");
    respond(state.auth_service.list_users().await, LIST_USERS_SUCCESS_MESSAGE)
}
