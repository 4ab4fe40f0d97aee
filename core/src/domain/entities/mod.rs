//! Domain entities representing core business objects.

pub mod token;
pub mod user;

pub use token::{AccessTokenClaims, RefreshTokenRecord, TokenPair, REFRESH_TOKEN_BYTES};
pub use user::{UserAccount, UserRecord};
