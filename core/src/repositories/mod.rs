pub mod token;
pub mod user;

pub use token::{InMemoryRefreshTokenStore, RefreshTokenStore};
pub use user::{InMemoryUserRepository, UserLookup, UserRepository};
