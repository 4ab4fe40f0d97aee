//! Authentication service module
//!
//! This module ties credential checks to the token engine:
//! - Username/password login issuing a token pair
//! - Token renewal
//! - User listing for authenticated callers
//! - Logout revoking outstanding refresh tokens

mod service;
mod verifier;

#[cfg(test)]
mod tests;

pub use service::{
    envelope, AuthService, LIST_USERS_SUCCESS_MESSAGE, LOGIN_SUCCESS_MESSAGE,
    LOGOUT_SUCCESS_MESSAGE, RENEW_SUCCESS_MESSAGE,
};
pub use verifier::{hash_password, BcryptCredentialVerifier, CredentialVerifier};
