//! services/api/src/web/health.rs

use axum::{http::header, response::IntoResponse};

/// GET /api/healthz - Readiness probe
#[utoipa::path(
    get,
    path = "/api/healthz",
    responses(
        (status = 200, description = "Service is ready", body = String, content_type = "text/plain")
    )
)]
pub async fn readiness_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], "OK")
}
