//! MySQL implementation of the UserLookup and UserRepository traits.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use jr_core::domain::entities::user::{UserAccount, UserRecord};
use jr_core::errors::DomainError;
use jr_core::repositories::{UserLookup, UserRepository};

use super::{decode_error, store_unavailable};

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Insert a user and return it with its generated ID
    pub async fn create(
        &self,
        username: &str,
        full_name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<UserRecord, DomainError> {
        let query = r#"
            INSERT INTO users (username, password_hash, full_name, email)
            VALUES (?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(username)
            .bind(password_hash)
            .bind(full_name)
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(|e| store_unavailable("Failed to create user", e))?;

        Ok(UserRecord::new(
            result.last_insert_id() as i64,
            username,
            full_name,
            email,
        ))
    }

    fn row_to_record(row: &sqlx::mysql::MySqlRow) -> Result<UserRecord, DomainError> {
        Ok(UserRecord {
            id: row.try_get("id").map_err(|e| decode_error("id", e))?,
            username: row.try_get("username").map_err(|e| decode_error("username", e))?,
            full_name: row
                .try_get("full_name")
                .map_err(|e| decode_error("full_name", e))?,
            email: row.try_get("email").map_err(|e| decode_error("email", e))?,
        })
    }
}

#[async_trait]
impl UserLookup for MySqlUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<UserRecord>, DomainError> {
        let query = "SELECT id, username, full_name, email FROM users WHERE id = ? LIMIT 1";

        let row = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| store_unavailable("Failed to find user by id", e))?;

        row.as_ref().map(Self::row_to_record).transpose()
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<UserAccount>, DomainError> {
        let query = r#"
            SELECT id, username, full_name, email, password_hash
            FROM users
            WHERE username = ?
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| store_unavailable("Failed to find user by username", e))?;

        match row {
            Some(row) => {
                let record = Self::row_to_record(&row)?;
                let password_hash: String = row
                    .try_get("password_hash")
                    .map_err(|e| decode_error("password_hash", e))?;
                Ok(Some(UserAccount::new(record, password_hash)))
            }
            None => Ok(None),
        }
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>, DomainError> {
        let rows = sqlx::query("SELECT id, username, full_name, email FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| store_unavailable("Failed to list users", e))?;

        rows.iter().map(Self::row_to_record).collect()
    }
}
