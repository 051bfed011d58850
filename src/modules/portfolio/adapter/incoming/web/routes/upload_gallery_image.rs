// src/modules/portfolio/adapter/incoming/web/routes/upload_gallery_image.rs
use actix_web::{http::header::CONTENT_TYPE, post, web, HttpRequest, Responder};
use bytes::BytesMut;
use futures::StreamExt;
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::admin::adapter::incoming::web::extractors::AdminSession;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::portfolio::application::{
    domain::{entities::GalleryImage, record::PortfolioRecord},
    ports::incoming::use_cases::{
        UploadGalleryImageCommand, UploadGalleryImageCommandError, UploadGalleryImageError,
    },
};
use crate::shared::api::{ApiResponse, FailedOperation};
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct UploadGalleryImageQuery {
    /// Original file name; only its extension is kept in the stored path.
    pub file_name: String,
    pub caption: Option<String>,
    pub category: Option<String>,
}

fn command_error_response(e: UploadGalleryImageCommandError) -> actix_web::HttpResponse {
    match e {
        UploadGalleryImageCommandError::FileTooLarge { .. } => {
            ApiResponse::payload_too_large(e.code(), &e.to_string())
        }
        UploadGalleryImageCommandError::UnsupportedContentType(_) => {
            ApiResponse::unsupported_media_type(e.code(), &e.to_string())
        }
        _ => ApiResponse::bad_request(e.code(), &e.to_string()),
    }
}

#[utoipa::path(
    post,
    path = "/api/admin/gallery",
    tag = "gallery",
    params(UploadGalleryImageQuery),
    request_body(content = Vec<u8>, content_type = "image/*", description = "Raw image bytes"),
    responses(
        (status = 201, description = "Image stored and recorded", body = inline(SuccessResponse<GalleryImage>)),
        (status = 400, description = "Invalid file name or empty body", body = ErrorResponse),
        (status = 401, description = "Missing or invalid admin token", body = ErrorResponse),
        (status = 413, description = "Image too large", body = ErrorResponse),
        (status = 415, description = "Body is not an image", body = ErrorResponse),
        (status = 500, description = "Error saving gallery image", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/admin/gallery")]
pub async fn upload_gallery_image_handler(
    _admin: AdminSession,
    req: HttpRequest,
    query: web::Query<UploadGalleryImageQuery>,
    mut payload: web::Payload,
    data: web::Data<AppState>,
) -> impl Responder {
    let upload = &data.portfolio.gallery_upload;
    let max = upload.policy.max_file_size_bytes;

    let mut body = BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = match chunk {
            Ok(chunk) => chunk,
            Err(e) => {
                return ApiResponse::bad_request("INVALID_BODY", &e.to_string());
            }
        };
        if body.len() + chunk.len() > max {
            return command_error_response(UploadGalleryImageCommandError::FileTooLarge { max });
        }
        body.extend_from_slice(&chunk);
    }

    let content_type = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();

    let query = query.into_inner();
    let command = match UploadGalleryImageCommand::new(
        query.file_name,
        content_type,
        body.freeze(),
        query.caption,
        query.category,
        &upload.policy,
    ) {
        Ok(command) => command,
        Err(e) => return command_error_response(e),
    };

    match upload.upload.execute(command).await {
        Ok(image) => ApiResponse::created(image),

        Err(UploadGalleryImageError::UploadFailed(e)) => {
            error!("Blob upload failed: {}", e);
            ApiResponse::operation_failed(FailedOperation::Uploading, "image")
        }

        Err(UploadGalleryImageError::RepositoryError(e)) => {
            error!("Repository error saving gallery image: {}", e);
            ApiResponse::operation_failed(FailedOperation::Saving, GalleryImage::KIND.label)
        }
    }
}
