use actix_web::{web, HttpResponse};

use jr_core::repositories::{RefreshTokenStore, UserRepository};
use jr_core::services::auth::{CredentialVerifier, LOGOUT_SUCCESS_MESSAGE};

use crate::handlers::respond;
use crate::middleware::AuthContext;

use super::AppState;

/// Handler for POST /api/user/logout
///
/// Revokes every outstanding refresh token of the caller. The access token
/// itself stays valid until it expires.
///
/// Requires `Authorization: Bearer {access_token}`. `data` holds the number
/// of revoked refresh tokens.
pub async fn logout<S, U, V>(
    state: web::Data<AppState<S, U, V>>,
    auth: AuthContext,
) -> HttpResponse
where
    S: RefreshTokenStore + 'static,
    U: UserRepository + 'static,
    V: CredentialVerifier + 'static,
{
    respond(state.auth_service.logout(auth.user_id).await, LOGOUT_SUCCESS_MESSAGE)
}
