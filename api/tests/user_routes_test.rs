//! Route tests for the user endpoints over in-memory stores

use std::sync::Arc;

use actix_web::{http::header, http::StatusCode, test, web};
use chrono::{Duration, TimeZone, Utc};
use serde_json::{json, Value};

use jr_api::app::create_app;
use jr_api::routes::user::AppState;
use jr_core::domain::entities::user::{UserAccount, UserRecord};
use jr_core::repositories::{InMemoryRefreshTokenStore, InMemoryUserRepository};
use jr_core::services::auth::{hash_password, AuthService, BcryptCredentialVerifier};
use jr_core::services::token::{ManualClock, SigningKey, TokenService, TokenServiceConfig};

const PASSWORD: &str = "open-sesame";

type TestState = AppState<
    InMemoryRefreshTokenStore,
    InMemoryUserRepository,
    BcryptCredentialVerifier<InMemoryUserRepository>,
>;

fn test_state() -> (web::Data<TestState>, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2024, 3, 15, 9, 0, 0).unwrap(),
    ));
    let hash = hash_password(PASSWORD, 4).unwrap();
    let users = Arc::new(InMemoryUserRepository::with_accounts([
        UserAccount::new(
            UserRecord::new(1, "alice", "Alice Liddell", "alice@example.com"),
            hash.clone(),
        ),
        UserAccount::new(
            UserRecord::new(2, "bob", "Bob Builder", "bob@example.com"),
            hash,
        ),
    ]));
    let token_service = Arc::new(
        TokenService::new(
            Arc::new(InMemoryRefreshTokenStore::new()),
            users.clone(),
            SigningKey::from_secret(b"route-test-signing-secret").unwrap(),
            TokenServiceConfig::default(),
        )
        .with_clock(clock.clone()),
    );
    let verifier = Arc::new(BcryptCredentialVerifier::new(users.clone()));
    let auth_service = Arc::new(AuthService::new(token_service, users, verifier));

    (web::Data::new(AppState::new(auth_service)), clock)
}

fn login_body(username: &str, password: &str) -> Value {
    json!({ "userName": username, "password": password })
}

fn renew_body(pair: &Value) -> Value {
    json!({
        "accessToken": pair["accessToken"],
        "refreshToken": pair["refreshToken"],
    })
}

#[actix_web::test]
async fn test_health_check() {
    let (state, _) = test_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_login_returns_token_pair() {
    let (state, _) = test_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/user/login")
        .set_json(login_body("alice", PASSWORD))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Authentication success");
    assert!(body["data"]["accessToken"].as_str().unwrap().contains('.'));
    assert_eq!(body["data"]["refreshToken"].as_str().unwrap().len(), 44);
}

#[actix_web::test]
async fn test_login_wrong_password_is_envelope_failure() {
    let (state, _) = test_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/user/login")
        .set_json(login_body("alice", "wrong"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid username/password");
    assert!(body["data"].is_null());
}

#[actix_web::test]
async fn test_login_validation_and_bad_json() {
    let (state, _) = test_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/user/login")
        .set_json(login_body("", PASSWORD))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid request: userName");

    let req = test::TestRequest::post()
        .uri("/api/user/login")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid request body");
}

#[actix_web::test]
async fn test_renewal_lifecycle() {
    let (state, clock) = test_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/user/login")
        .set_json(login_body("alice", PASSWORD))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let pair = body["data"].clone();

    // Access token still valid
    let req = test::TestRequest::post()
        .uri("/api/user/renew-token")
        .set_json(renew_body(&pair))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Access token has not yet expired");

    clock.advance(Duration::seconds(10));

    let req = test::TestRequest::post()
        .uri("/api/user/renew-token")
        .set_json(renew_body(&pair))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Renew token success");
    assert_ne!(body["data"]["refreshToken"], pair["refreshToken"]);

    // Replay of the consumed refresh token
    let req = test::TestRequest::post()
        .uri("/api/user/renew-token")
        .set_json(renew_body(&pair))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Refresh token has been used");
}

#[actix_web::test]
async fn test_list_users_requires_bearer() {
    let (state, _) = test_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::get().uri("/api/user").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Missing or invalid bearer token");

    let req = test::TestRequest::post()
        .uri("/api/user/login")
        .set_json(login_body("bob", PASSWORD))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let access = body["data"]["accessToken"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri("/api/user")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", access)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Users retrieved");
    let users = body["data"].as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["userName"], "alice");
}

#[actix_web::test]
async fn test_expired_bearer_is_rejected() {
    let (state, clock) = test_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/user/login")
        .set_json(login_body("alice", PASSWORD))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let access = body["data"]["accessToken"].as_str().unwrap().to_string();

    clock.advance(Duration::seconds(10));

    let req = test::TestRequest::get()
        .uri("/api/user")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", access)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Access token has expired");
}

#[actix_web::test]
async fn test_logout_revokes_refresh_tokens() {
    let (state, clock) = test_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/user/login")
        .set_json(login_body("alice", PASSWORD))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let pair = body["data"].clone();
    let access = pair["accessToken"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/api/user/logout")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", access)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Logout success");
    assert_eq!(body["data"], 1);

    clock.advance(Duration::seconds(11));

    let req = test::TestRequest::post()
        .uri("/api/user/renew-token")
        .set_json(renew_body(&pair))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Refresh token has been revoked");
}

#[actix_web::test]
async fn test_unknown_route_is_not_found() {
    let (state, _) = test_state();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::get().uri("/api/nowhere").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
