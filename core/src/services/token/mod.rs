//! Token service module for the access/refresh token lifecycle
//!
//! This module handles all token-related operations including:
//! - HS512 access token signing and verification
//! - Opaque refresh token generation
//! - Single-use rotation of refresh tokens bound to one access token
//! - Revocation of a user's outstanding refresh tokens

mod clock;
mod codec;
mod config;
mod service;
mod signing_key;

#[cfg(test)]
mod tests;

pub use clock::{Clock, ManualClock, SystemClock};
pub use codec::{DecodeOptions, TokenCodec, SIGNING_ALGORITHM};
pub use config::TokenServiceConfig;
pub use service::{generate_refresh_token, AccessTokenVerifier, TokenService};
pub use signing_key::SigningKey;
