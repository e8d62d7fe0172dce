//! services/api/src/adapters/db.rs
//!
//! This module contains the database adapter, which is the concrete implementation
//! of the `DatabaseService` port from the `core` crate. It handles all interactions
//! with the PostgreSQL database using `sqlx`.

use async_trait::async_trait;
use chirpy_core::domain::{Chirp, User};
use chirpy_core::ports::{DatabaseService, PortError, PortResult};
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// A database adapter that implements the `DatabaseService` port.
#[derive(Clone)]
pub struct DbAdapter {
    pool: PgPool,
}

impl DbAdapter {
    /// Creates a new `DbAdapter`.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// A helper function to run database migrations at startup.
    pub async fn run_migrations(&self) -> Result<(), sqlx::Error> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

/// Classifies a driver error, so handlers never have to inspect message text.
fn map_db_error(e: sqlx::Error) -> PortError {
    match &e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            PortError::Conflict(db_err.message().to_string())
        }
        _ => PortError::Unexpected(e.to_string()),
    }
}

//=========================================================================================
// "Impure" Database Record Structs
//=========================================================================================

#[derive(FromRow)]
struct UserRecord {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    email: String,
}
impl UserRecord {
    fn to_domain(self) -> User {
        User {
            id: self.id,
            created_at: self.created_at,
            updated_at: self.updated_at,
            email: self.email,
        }
    }
}

#[derive(FromRow)]
struct ChirpRecord {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    body: String,
    user_id: Uuid,
}
impl ChirpRecord {
    fn to_domain(self) -> Chirp {
        Chirp {
            id: self.id,
            created_at: self.created_at,
            updated_at: self.updated_at,
            body: self.body,
            user_id: self.user_id,
        }
    }
}

//=========================================================================================
// `DatabaseService` Trait Implementation
//=========================================================================================

#[async_trait]
impl DatabaseService for DbAdapter {
    async fn create_user(&self, email: &str) -> PortResult<User> {
        let now = Utc::now();
        let record = sqlx::query_as::<_, UserRecord>(
            "INSERT INTO users (id, created_at, updated_at, email) VALUES ($1, $2, $3, $4) \
             RETURNING id, created_at, updated_at, email",
        )
        .bind(Uuid::new_v4())
        .bind(now)
        .bind(now)
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;
        Ok(record.to_domain())
    }

    async fn create_chirp(&self, chirp: Chirp) -> PortResult<Chirp> {
        let record = sqlx::query_as::<_, ChirpRecord>(
            "INSERT INTO chirps (id, created_at, updated_at, body, user_id) VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, created_at, updated_at, body, user_id",
        )
        .bind(chirp.id)
        .bind(chirp.created_at)
        .bind(chirp.updated_at)
        .bind(chirp.body)
        .bind(chirp.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;
        Ok(record.to_domain())
    }

    async fn delete_all_users(&self) -> PortResult<()> {
        // chirps go with their users via ON DELETE CASCADE
        sqlx::query("DELETE FROM users")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_constraint_driver_errors_are_unexpected() {
        assert!(matches!(
            map_db_error(sqlx::Error::PoolTimedOut),
            PortError::Unexpected(_)
        ));
        assert!(matches!(
            map_db_error(sqlx::Error::RowNotFound),
            PortError::Unexpected(_)
        ));
    }
}
