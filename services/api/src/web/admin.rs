//! services/api/src/web/admin.rs
//!
//! Operational endpoints: hit metrics and the development-only reset.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse},
};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::error::ApiError;
use crate::web::response::ErrorResponse;
use crate::web::state::AppState;

/// GET /admin/metrics - Hit count as an admin HTML page
#[utoipa::path(
    get,
    path = "/admin/metrics",
    responses(
        (status = 200, description = "Metrics page", body = String, content_type = "text/html")
    )
)]
pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(format!(
        "<html>
  <body>
    <h1>Welcome, Chirpy Admin</h1>
    <p>Chirpy has been visited {} times!</p>
  </body>
</html>",
        state.hits.load()
    ))
}

/// GET /api/metrics - Hit count as plain text
#[utoipa::path(
    get,
    path = "/api/metrics",
    responses(
        (status = 200, description = "Hit count", body = String, content_type = "text/plain")
    )
)]
pub async fn plain_metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        format!("Hits: {}", state.hits.load()),
    )
}

/// POST /admin/reset - Wipe users and chirps, then zero the hit counter
///
/// Only permitted when `PLATFORM=dev`. The counter is left untouched unless the
/// database wipe succeeds.
#[utoipa::path(
    post,
    path = "/admin/reset",
    responses(
        (status = 200, description = "State reset", body = String, content_type = "text/plain"),
        (status = 403, description = "Not a development deployment", body = ErrorResponse),
        (status = 500, description = "Database reset failed", body = ErrorResponse)
    )
)]
pub async fn reset_handler(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    if !state.config.allows_reset() {
        warn!(platform = %state.config.platform, "refusing reset outside dev");
        return Err(ApiError::Forbidden(
            "Reset is only allowed in dev environment.".to_string(),
        ));
    }

    state.db.delete_all_users().await.map_err(|e| {
        error!("Failed to reset the database: {:?}", e);
        ApiError::Internal("Couldn't reset the database".to_string())
    })?;
    state.hits.reset();

    info!("hits and database reset");
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        "Hits reset to 0 and database reset to initial state.",
    ))
}
