//! User entities consumed by the token engine.
//!
//! Registration and profile management live outside this system; the token
//! engine only reads the fields it embeds into access token claims.

use serde::{Deserialize, Serialize};

/// Public view of a user account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Numeric user identifier
    pub id: i64,

    /// Login name
    #[serde(rename = "userName")]
    pub username: String,

    /// Display name
    pub full_name: String,

    /// Email address
    pub email: String,
}

impl UserRecord {
    pub fn new(
        id: i64,
        username: impl Into<String>,
        full_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            full_name: full_name.into(),
            email: email.into(),
        }
    }
}

/// User record together with its stored bcrypt password hash
#[derive(Clone)]
pub struct UserAccount {
    pub record: UserRecord,
    pub password_hash: String,
}

impl UserAccount {
    pub fn new(record: UserRecord, password_hash: impl Into<String>) -> Self {
        Self {
            record,
            password_hash: password_hash.into(),
        }
    }
}

impl std::fmt::Debug for UserAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserAccount")
            .field("record", &self.record)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/user_tests.rs"]
mod tests;
