use actix_web::{web, HttpResponse};
use validator::Validate;

use jr_core::repositories::{RefreshTokenStore, UserRepository};
use jr_core::services::auth::{CredentialVerifier, RENEW_SUCCESS_MESSAGE};

use crate::dto::RenewTokenRequest;
use crate::handlers::{respond, ApiError};

use super::AppState;

/// Handler for POST /api/user/renew-token
///
/// Exchanges an expired access token and the refresh token issued with it
/// for a new pair. The old refresh token is consumed.
///
/// # Request Body
///
/// ```json
/// {
///     "accessToken": "eyJ...",
///     "refreshToken": "base64..."
/// }
/// ```
///
/// Rejections answer 200 with `success: false` and the rejection category
/// as the message, e.g. "Access token has not yet expired" or
/// "Refresh token has been used".
pub async fn renew_token<S, U, V>(
    state: web::Data<AppState<S, U, V>>,
    request: web::Json<RenewTokenRequest>,
) -> Result<HttpResponse, ApiError>
where
    S: RefreshTokenStore + 'static,
    U: UserRepository + 'static,
    V: CredentialVerifier + 'static,
{
    request.validate().map_err(|e| ApiError::validation(&e))?;

    let result = state
        .auth_service
        .renew_token(&request.access_token, &request.refresh_token)
        .await;

    Ok(respond(result, RENEW_SUCCESS_MESSAGE))
}
