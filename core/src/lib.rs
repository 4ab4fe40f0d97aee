//! # JwtRenew Core
//!
//! Token lifecycle engine for the JwtRenew backend. This crate contains the
//! domain entities, the error taxonomy, repository interfaces with in-memory
//! implementations, and the services that issue, verify and rotate
//! access/refresh token pairs.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
