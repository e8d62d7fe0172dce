//! services/api/src/web/state.rs
//!
//! Defines the application's shared state.

use crate::config::Config;
use crate::error::ApiError;
use chirpy_core::ports::DatabaseService;
use chirpy_core::{HitCounter, Moderator};
use std::sync::Arc;

/// The shared application state, created once at startup and passed to all
/// handlers behind an `Arc`.
pub struct AppState {
    pub db: Arc<dyn DatabaseService>,
    pub config: Arc<Config>,
    pub hits: HitCounter,
    pub moderator: Moderator,
}

impl AppState {
    /// Builds the state with a zeroed hit counter and a moderator in the
    /// configured match mode.
    pub fn new(db: Arc<dyn DatabaseService>, config: Arc<Config>) -> Result<Self, ApiError> {
        let moderator = Moderator::new(config.moderation_mode).map_err(|e| {
            ApiError::Internal(format!("Failed to build moderation filter: {}", e))
        })?;
        Ok(Self {
            db,
            config,
            hits: HitCounter::new(),
            moderator,
        })
    }
}
