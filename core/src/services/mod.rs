//! Business services containing domain logic and use cases.

pub mod auth;
pub mod token;

// Re-export commonly used types
pub use auth::{envelope, AuthService, BcryptCredentialVerifier, CredentialVerifier};
pub use token::{
    AccessTokenVerifier, Clock, ManualClock, SigningKey, SystemClock, TokenCodec, TokenService,
    TokenServiceConfig,
};
