//! MySQL implementation of the RefreshTokenStore trait.
//!
//! Token values are stored as issued and matched exactly; the column uses a
//! binary collation. The conditional retire is a single guarded `UPDATE`, so
//! the database row lock decides between concurrent renewals.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use jr_core::domain::entities::token::RefreshTokenRecord;
use jr_core::errors::{DomainError, TokenError};
use jr_core::repositories::RefreshTokenStore;

use super::{decode_error, store_unavailable};

const SELECT_COLUMNS: &str = "SELECT id, jwt_id, user_id, token, is_used, is_revoked, \
     issued_at, expires_at FROM refresh_tokens";

/// MySQL implementation of RefreshTokenStore
pub struct MySqlRefreshTokenStore {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlRefreshTokenStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_record(row: &sqlx::mysql::MySqlRow) -> Result<RefreshTokenRecord, DomainError> {
        let id: String = row.try_get("id").map_err(|e| decode_error("id", e))?;

        Ok(RefreshTokenRecord {
            id: Uuid::parse_str(&id).map_err(|e| decode_error("id", e))?,
            jwt_id: row.try_get("jwt_id").map_err(|e| decode_error("jwt_id", e))?,
            user_id: row.try_get("user_id").map_err(|e| decode_error("user_id", e))?,
            token: row.try_get("token").map_err(|e| decode_error("token", e))?,
            is_used: row.try_get("is_used").map_err(|e| decode_error("is_used", e))?,
            is_revoked: row
                .try_get("is_revoked")
                .map_err(|e| decode_error("is_revoked", e))?,
            issued_at: row
                .try_get::<DateTime<Utc>, _>("issued_at")
                .map_err(|e| decode_error("issued_at", e))?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| decode_error("expires_at", e))?,
        })
    }
}

#[async_trait]
impl RefreshTokenStore for MySqlRefreshTokenStore {
    async fn insert(&self, record: RefreshTokenRecord) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO refresh_tokens (
                id, jwt_id, user_id, token, is_used, is_revoked, issued_at, expires_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(record.id.to_string())
            .bind(&record.jwt_id)
            .bind(record.user_id)
            .bind(&record.token)
            .bind(record.is_used)
            .bind(record.is_revoked)
            .bind(record.issued_at)
            .bind(record.expires_at)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                tracing::warn!(record_id = %record.id, "Refresh token value collided");
                Err(TokenError::DuplicateToken.into())
            }
            Err(e) => Err(store_unavailable("Failed to insert refresh token", e)),
        }
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<RefreshTokenRecord>, DomainError> {
        let query = format!("{} WHERE token = ? LIMIT 1", SELECT_COLUMNS);

        let row = sqlx::query(&query)
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| store_unavailable("Failed to find refresh token", e))?;

        row.as_ref().map(Self::row_to_record).transpose()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<RefreshTokenRecord>, DomainError> {
        let query = format!("{} WHERE id = ? LIMIT 1", SELECT_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| store_unavailable("Failed to find refresh token by id", e))?;

        row.as_ref().map(Self::row_to_record).transpose()
    }

    async fn mark_used_and_revoked(&self, id: Uuid) -> Result<bool, DomainError> {
        let query = r#"
            UPDATE refresh_tokens
            SET is_used = TRUE, is_revoked = TRUE
            WHERE id = ? AND is_used = FALSE AND is_revoked = FALSE
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| store_unavailable("Failed to retire refresh token", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn revoke_all_for_user(&self, user_id: i64) -> Result<usize, DomainError> {
        let query = r#"
            UPDATE refresh_tokens
            SET is_revoked = TRUE
            WHERE user_id = ? AND is_revoked = FALSE
        "#;

        let result = sqlx::query(query)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| store_unavailable("Failed to revoke user tokens", e))?;

        Ok(result.rows_affected() as usize)
    }
}
