//! services/api/src/web/middleware.rs
//!
//! Middleware for the static file tree.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::web::state::AppState;

/// Counts one hit per request, before the wrapped service runs.
pub async fn count_hits(State(state): State<Arc<AppState>>, req: Request, next: Next) -> Response {
    state.hits.increment();
    next.run(req).await
}
