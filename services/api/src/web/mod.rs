pub mod admin;
pub mod chirps;
pub mod health;
pub mod middleware;
pub mod response;
pub mod rest;
pub mod state;
pub mod users;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

pub use middleware::count_hits;
pub use state::AppState;

/// Build the complete application router.
///
/// - `/app/*` - static files from `FILEPATH_ROOT`, each request counted as a hit
/// - `GET /api/healthz` - readiness
/// - `POST /api/users` - register a user
/// - `POST /api/chirps` - moderate and store a chirp
/// - `POST /api/validate_chirp` - moderate only
/// - `GET /api/metrics` - hit count as text
/// - `GET /admin/metrics` - hit count as HTML
/// - `POST /admin/reset` - dev-only wipe
pub fn router(state: Arc<AppState>) -> Router {
    let static_files: Router = Router::new()
        .nest_service("/app", ServeDir::new(&state.config.filepath_root))
        .layer(axum_middleware::from_fn_with_state(state.clone(), count_hits));

    let api_routes: Router = Router::new()
        .route("/api/healthz", get(health::readiness_handler))
        .route("/api/users", post(users::create_user_handler))
        .route("/api/chirps", post(chirps::create_chirp_handler))
        .route("/api/validate_chirp", post(chirps::validate_chirp_handler))
        .route("/api/metrics", get(admin::plain_metrics_handler))
        .route("/admin/metrics", get(admin::metrics_handler))
        .route("/admin/reset", post(admin::reset_handler))
        .with_state(state);

    Router::new()
        .merge(static_files)
        .merge(api_routes)
        .layer(TraceLayer::new_for_http())
}
