use actix_web::{get, patch, web, Responder};
use tracing::error;

use crate::admin::adapter::incoming::web::extractors::AdminSession;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::portfolio::application::{
    domain::profile::{ProfileData, ProfilePatch},
    ports::incoming::use_cases::{GetProfileError, UpsertProfileError},
};
use crate::shared::api::{ApiResponse, FailedOperation};
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "profile",
    responses(
        (status = 200, description = "The site owner's profile", body = inline(SuccessResponse<ProfileData>)),
        (status = 404, description = "No profile has been written yet", body = ErrorResponse),
        (status = 503, description = "Backend unavailable", body = ErrorResponse),
    )
)]
#[get("/api/profile")]
pub async fn get_profile_handler(data: web::Data<AppState>) -> impl Responder {
    match data.portfolio.profile.get.execute().await {
        Ok(Some(profile)) => ApiResponse::success(profile),

        Ok(None) => ApiResponse::not_found("PROFILE_NOT_FOUND", "Profile has not been created"),

        Err(GetProfileError::BackendUnavailable(e)) => {
            error!("Backend unavailable reading profile: {}", e);
            ApiResponse::backend_unavailable("profile")
        }
    }
}

#[utoipa::path(
    patch,
    path = "/api/admin/profile",
    tag = "profile",
    request_body(content = ProfileData, description = "Any subset of profile fields; null clears an optional field"),
    responses(
        (status = 200, description = "Profile after the merge", body = inline(SuccessResponse<ProfileData>)),
        (status = 400, description = "Invalid field value", body = ErrorResponse),
        (status = 401, description = "Missing or invalid admin token", body = ErrorResponse),
        (status = 500, description = "Error saving profile", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[patch("/api/admin/profile")]
pub async fn upsert_profile_handler(
    _admin: AdminSession,
    req: web::Json<ProfilePatch>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.portfolio.profile.upsert.execute(req.into_inner()).await {
        Ok(profile) => ApiResponse::success(profile),

        Err(UpsertProfileError::Validation(e)) => {
            ApiResponse::bad_request(e.code(), &e.to_string())
        }

        Err(UpsertProfileError::RepositoryError(e)) => {
            error!("Repository error saving profile: {}", e);
            ApiResponse::operation_failed(FailedOperation::Saving, "profile")
        }
    }
}
