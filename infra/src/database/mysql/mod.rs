//! MySQL implementations of the core repository traits

mod refresh_token_store_impl;
mod user_repository_impl;

pub use refresh_token_store_impl::MySqlRefreshTokenStore;
pub use user_repository_impl::MySqlUserRepository;

use jr_core::errors::DomainError;

/// Map a query failure onto the domain's store outage error
pub(crate) fn store_unavailable(context: &str, err: sqlx::Error) -> DomainError {
    tracing::error!(error = %err, "{}", context);
    DomainError::StoreUnavailable {
        message: format!("{}: {}", context, err),
    }
}

/// Map a column decode failure
pub(crate) fn decode_error(column: &str, err: impl std::fmt::Display) -> DomainError {
    DomainError::Internal {
        message: format!("Failed to get {}: {}", column, err),
    }
}
