// src/shared/api/extractor_config.rs
use actix_web::{
    error::{InternalError, ResponseError},
    web::{JsonConfig, PathConfig, QueryConfig},
    Error, HttpRequest,
};
use tracing::debug;

use crate::shared::api::ApiResponse;

/// Largest JSON body accepted by the record and profile routes.
pub const JSON_BODY_LIMIT: usize = 64 * 1024;

/// Turns an extractor failure into an enveloped 400 carrying `code`.
fn reject_with<E>(code: &'static str) -> impl Fn(E, &HttpRequest) -> Error + Send + Sync + 'static
where
    E: ResponseError + 'static,
{
    move |err: E, req: &HttpRequest| {
        debug!("Rejected {} {}: {}", req.method(), req.path(), err);
        let response = ApiResponse::bad_request(code, &err.to_string());
        InternalError::from_response(err, response).into()
    }
}

/// Drafts and patches that fail to deserialize, e.g. an unknown `status`.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(reject_with("VALIDATION_ERROR"))
}

pub fn custom_query_config() -> QueryConfig {
    QueryConfig::default().error_handler(reject_with("INVALID_QUERY"))
}

/// `{id}` segments that are not UUIDs.
pub fn custom_path_config() -> PathConfig {
    PathConfig::default().error_handler(reject_with("INVALID_ID"))
}
