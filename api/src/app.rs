//! Application factory
//!
//! Builds the Actix-web application around an already wired
//! [`AppState`]. The binary and the route tests share this factory.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use jr_core::repositories::{RefreshTokenStore, UserRepository};
use jr_core::services::auth::CredentialVerifier;
use jr_core::services::token::AccessTokenVerifier;
use jr_shared::ApiResponse;

use crate::handlers::json_error_handler;
use crate::middleware::BearerAuth;
use crate::routes::user::{list_users, login, logout, renew_token, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<S, U, V>(
    app_state: web::Data<AppState<S, U, V>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    S: RefreshTokenStore + 'static,
    U: UserRepository + 'static,
    V: CredentialVerifier + 'static,
{
    let verifier: Arc<dyn AccessTokenVerifier> = app_state.auth_service.token_service().clone();

    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/user")
                .service(web::resource("/login").route(web::post().to(login::<S, U, V>)))
                .service(
                    web::resource("/renew-token").route(web::post().to(renew_token::<S, U, V>)),
                )
                .service(
                    web::resource("/logout")
                        .wrap(BearerAuth::new(verifier.clone()))
                        .route(web::post().to(logout::<S, U, V>)),
                )
                .service(
                    web::resource("")
                        .wrap(BearerAuth::new(verifier))
                        .route(web::get().to(list_users::<S, U, V>)),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "jwt-renew-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::<()>::failure(
        "The requested resource was not found",
    ))
}
