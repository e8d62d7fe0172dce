//! crates/chirpy_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! The storage layer sits behind `DatabaseService` so the handlers never see SQL.

use async_trait::async_trait;

use crate::domain::{Chirp, User};

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external services (e.g., database).
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    /// A uniqueness constraint rejected the write.
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

#[async_trait]
pub trait DatabaseService: Send + Sync {
    /// Creates a user with a generated id and timestamps.
    ///
    /// Returns `PortError::Conflict` when the email is already registered; no
    /// user is written in that case.
    async fn create_user(&self, email: &str) -> PortResult<User>;

    /// Persists a fully built chirp and returns the stored row.
    async fn create_chirp(&self, chirp: Chirp) -> PortResult<Chirp>;

    /// Removes every user, and with them every chirp.
    async fn delete_all_users(&self) -> PortResult<()>;
}
