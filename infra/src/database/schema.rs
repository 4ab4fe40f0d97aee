//! Table definitions created by [`DatabasePool::ensure_schema`](super::DatabasePool::ensure_schema)

/// Users known to the credential check
pub const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
        username VARCHAR(100) NOT NULL,
        password_hash VARCHAR(255) NOT NULL,
        full_name VARCHAR(255) NOT NULL,
        email VARCHAR(255) NOT NULL,
        UNIQUE KEY uk_users_username (username)
    )
"#;

/// Refresh token records
///
/// `token` uses a binary collation: lookups are exact and case-sensitive.
pub const CREATE_REFRESH_TOKENS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS refresh_tokens (
        id CHAR(36) NOT NULL PRIMARY KEY,
        jwt_id VARCHAR(64) NOT NULL,
        user_id BIGINT NOT NULL,
        token VARCHAR(128) CHARACTER SET ascii COLLATE ascii_bin NOT NULL,
        is_used BOOLEAN NOT NULL DEFAULT FALSE,
        is_revoked BOOLEAN NOT NULL DEFAULT FALSE,
        issued_at DATETIME(6) NOT NULL,
        expires_at DATETIME(6) NOT NULL,
        UNIQUE KEY uk_refresh_tokens_token (token),
        KEY idx_refresh_tokens_user_id (user_id),
        CONSTRAINT fk_refresh_tokens_user FOREIGN KEY (user_id) REFERENCES users (id)
    )
"#;

/// Statements in creation order
pub const SCHEMA: [&str; 2] = [CREATE_USERS_TABLE, CREATE_REFRESH_TOKENS_TABLE];
