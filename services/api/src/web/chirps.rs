//! services/api/src/web/chirps.rs
//!
//! Chirp submission and the standalone validation endpoint. Both run the body
//! through the moderation filter; only `create_chirp_handler` stores anything.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Response,
    Json,
};
use chirpy_core::domain::Chirp;
use chirpy_core::ModerationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::ApiError;
use crate::web::response::{respond_with_json, ErrorResponse};
use crate::web::state::AppState;

//=========================================================================================
// Request/Response Types
//=========================================================================================

#[derive(Deserialize, ToSchema)]
pub struct CreateChirpRequest {
    pub body: String,
    pub user_id: Uuid,
}

#[derive(Deserialize, ToSchema)]
pub struct ValidateChirpRequest {
    pub body: String,
}

/// The public representation of a chirp.
#[derive(Debug, Serialize, ToSchema)]
pub struct ChirpResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub body: String,
    pub user_id: Uuid,
}

impl From<Chirp> for ChirpResponse {
    fn from(chirp: Chirp) -> Self {
        Self {
            id: chirp.id,
            created_at: chirp.created_at,
            updated_at: chirp.updated_at,
            body: chirp.body,
            user_id: chirp.user_id,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ValidateChirpResponse {
    pub valid: bool,
    pub cleaned_body: String,
}

fn moderation_rejected(e: ModerationError) -> ApiError {
    match e {
        ModerationError::TooLong { .. } => ApiError::BadRequest("Chirp is too long".to_string()),
    }
}

//=========================================================================================
// Handlers
//=========================================================================================

/// POST /api/chirps - Moderate and store a chirp
#[utoipa::path(
    post,
    path = "/api/chirps",
    request_body = CreateChirpRequest,
    responses(
        (status = 201, description = "Chirp created", body = ChirpResponse),
        (status = 400, description = "Invalid body or chirp too long", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_chirp_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateChirpRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = payload?;

    let cleaned = state.moderator.moderate(&req.body).map_err(moderation_rejected)?;

    let chirp = state
        .db
        .create_chirp(Chirp::new(cleaned, req.user_id))
        .await
        .map_err(|e| {
            error!("Failed to create chirp: {:?}", e);
            ApiError::Internal("Couldn't create chirp".to_string())
        })?;

    info!(chirp_id = %chirp.id, user_id = %chirp.user_id, "created chirp");
    Ok(respond_with_json(StatusCode::CREATED, &ChirpResponse::from(chirp)))
}

/// POST /api/validate_chirp - Moderate a chirp without storing it
#[utoipa::path(
    post,
    path = "/api/validate_chirp",
    request_body = ValidateChirpRequest,
    responses(
        (status = 200, description = "Chirp is valid", body = ValidateChirpResponse),
        (status = 400, description = "Invalid body or chirp too long", body = ErrorResponse)
    )
)]
pub async fn validate_chirp_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ValidateChirpRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = payload?;

    let cleaned_body = state.moderator.moderate(&req.body).map_err(moderation_rejected)?;

    Ok(respond_with_json(
        StatusCode::OK,
        &ValidateChirpResponse {
            valid: true,
            cleaned_body,
        },
    ))
}
