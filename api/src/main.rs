use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;

use jr_api::app::create_app;
use jr_api::routes::user::AppState;
use jr_api::telemetry::init_tracing;
use jr_core::repositories::{
    InMemoryRefreshTokenStore, InMemoryUserRepository, RefreshTokenStore, UserRepository,
};
use jr_core::services::auth::{AuthService, BcryptCredentialVerifier};
use jr_core::services::token::{SigningKey, TokenService, TokenServiceConfig};
use jr_infra::{DatabasePool, MySqlRefreshTokenStore, MySqlUserRepository};
use jr_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().context("invalid configuration")?;
    init_tracing(&config.logging);

    config.validate().context("invalid configuration")?;
    let signing_key = SigningKey::from_config(&config.jwt)?;
    let token_config = TokenServiceConfig::try_from(&config.jwt)?;

    tracing::info!(
        environment = %config.environment,
        access_ttl_secs = config.jwt.access_token_expiry,
        refresh_ttl_secs = config.jwt.refresh_token_expiry,
        "Starting JwtRenew API server"
    );

    if config.database.is_persistent() {
        let pool = DatabasePool::new(&config.database).await?;
        pool.ensure_schema().await?;
        tracing::info!(stats = %pool.get_statistics(), "Database ready");

        let store = Arc::new(MySqlRefreshTokenStore::new(pool.get_pool().clone()));
        let users = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
        let result = serve(&config, store, users, signing_key, token_config).await;
        pool.close().await;
        result
    } else {
        tracing::warn!("DATABASE_URL not set, using in-memory stores without any users");
        let store = Arc::new(InMemoryRefreshTokenStore::new());
        let users = Arc::new(InMemoryUserRepository::new());
        serve(&config, store, users, signing_key, token_config).await
    }
}

async fn serve<S, U>(
    config: &AppConfig,
    store: Arc<S>,
    users: Arc<U>,
    signing_key: SigningKey,
    token_config: TokenServiceConfig,
) -> anyhow::Result<()>
where
    S: RefreshTokenStore + 'static,
    U: UserRepository + 'static,
{
    let token_service = Arc::new(TokenService::new(
        store,
        users.clone(),
        signing_key,
        token_config,
    ));
    let verifier = Arc::new(BcryptCredentialVerifier::new(users.clone()));
    let auth_service = Arc::new(AuthService::new(token_service, users, verifier));
    let app_state = web::Data::new(AppState::new(auth_service));

    let bind_address = config.server.bind_address();
    tracing::info!(%bind_address, "Server will bind");

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    Ok(())
}
