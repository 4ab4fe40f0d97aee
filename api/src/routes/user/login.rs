use actix_web::{web, HttpResponse};
use validator::Validate;

use jr_core::repositories::{RefreshTokenStore, UserRepository};
use jr_core::services::auth::{CredentialVerifier, LOGIN_SUCCESS_MESSAGE};

use crate::dto::LoginRequest;
use crate::handlers::{respond, ApiError};

use super::AppState;

/// Handler for POST /api/user/login
///
/// # Request Body
///
/// ```json
/// {
///     "userName": "alice",
///     "password": "secret"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "success": true,
///     "message": "Authentication success",
///     "data": { "accessToken": "eyJ...", "refreshToken": "base64..." }
/// }
/// ```
///
/// Wrong credentials answer 200 with `success: false` and
/// "Invalid username/password".
pub async fn login<S, U, V>(
    state: web::Data<AppState<S, U, V>>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError>
where
    S: RefreshTokenStore + 'static,
    U: UserRepository + 'static,
    V: CredentialVerifier + 'static,
{
    request.validate().map_err(|e| ApiError::validation(&e))?;

    let result = state
        .auth_service
        .login(&request.username, &request.password)
        .await;

    Ok(respond(result, LOGIN_SUCCESS_MESSAGE))
}
