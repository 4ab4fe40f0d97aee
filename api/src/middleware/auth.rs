//! Bearer authentication middleware for protecting API endpoints.
//!
//! Extracts the access token from the Authorization header, verifies it
//! with the token service (signature, HS512 header and lifetime) and
//! injects the caller's identity into the request extensions.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest, ResponseError,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
};

use jr_core::{
    domain::entities::token::AccessTokenClaims,
    errors::{AuthError, TokenError},
    services::token::AccessTokenVerifier,
};

use crate::handlers::ApiError;

/// Caller identity taken from a verified access token
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User ID from the `Id` claim
    pub user_id: i64,
    /// Login name
    pub username: String,
    /// JWT ID of the presented token
    pub jti: String,
}

impl AuthContext {
    pub fn from_claims(claims: AccessTokenClaims) -> Result<Self, TokenError> {
        let user_id = claims.user_id().ok_or(TokenError::Malformed)?;
        Ok(Self {
            user_id,
            username: claims.username,
            jti: claims.jti,
        })
    }
}

/// Bearer authentication middleware factory
#[derive(Clone)]
pub struct BearerAuth {
    verifier: Arc<dyn AccessTokenVerifier>,
}

impl BearerAuth {
    pub fn new(verifier: Arc<dyn AccessTokenVerifier>) -> Self {
        Self { verifier }
    }
}

impl<S, B> Transform<S, ServiceRequest> for BearerAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = BearerAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(BearerAuthMiddleware {
            service: Rc::new(service),
            verifier: self.verifier.clone(),
        }))
    }
}

/// Bearer authentication middleware service
pub struct BearerAuthMiddleware<S> {
    service: Rc<S>,
    verifier: Arc<dyn AccessTokenVerifier>,
}

impl<S, B> Service<ServiceRequest> for BearerAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    actix_web::dev::forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let verifier = Arc::clone(&self.verifier);

        Box::pin(async move {
            let context = match authenticate(&req, verifier.as_ref()) {
                Ok(context) => context,
                Err(err) => {
                    // Rejections are rendered here so they never surface as service errors
                    let response = err.error_response();
                    return Ok(req.into_response(response).map_into_right_body());
                }
            };

            req.extensions_mut().insert(context);
            service.call(req).await.map(ServiceResponse::map_into_left_body)
        })
    }
}

fn authenticate(
    req: &ServiceRequest,
    verifier: &dyn AccessTokenVerifier,
) -> Result<AuthContext, ApiError> {
    let token = extract_bearer_token(req)
        .ok_or_else(|| ApiError::unauthorized(AuthError::Unauthorized.to_string()))?;

    let claims = verifier.verify_access_token(&token).map_err(|e| {
        tracing::debug!(reason = e.code(), "Bearer token rejected");
        ApiError::unauthorized(e.public_message())
    })?;

    AuthContext::from_claims(claims).map_err(|e| ApiError::unauthorized(e.to_string()))
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result: Result<Self, Self::Error> = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ApiError::unauthorized(AuthError::Unauthorized.to_string()).into());

        ready(result)
    }
}
