//! services/api/src/web/rest.rs
//!
//! The master definition for the OpenAPI specification.

use utoipa::OpenApi;

use crate::web::chirps::{
    ChirpResponse, CreateChirpRequest, ValidateChirpRequest, ValidateChirpResponse,
};
use crate::web::response::ErrorResponse;
use crate::web::users::{CreateUserRequest, UserResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::web::health::readiness_handler,
        crate::web::users::create_user_handler,
        crate::web::chirps::create_chirp_handler,
        crate::web::chirps::validate_chirp_handler,
        crate::web::admin::metrics_handler,
        crate::web::admin::plain_metrics_handler,
        crate::web::admin::reset_handler,
    ),
    components(
        schemas(
            CreateUserRequest,
            UserResponse,
            CreateChirpRequest,
            ChirpResponse,
            ValidateChirpRequest,
            ValidateChirpResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Chirpy API", description = "Users, chirps and operational endpoints.")
    )
)]
pub struct ApiDoc;
