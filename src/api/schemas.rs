// src/api/schemas.rs

//! Documentation-only shapes of the response envelope.
//!
//! Handlers build the envelope through `ApiResponse`; these exist so utoipa
//! can describe `data` per route.

use serde::Serialize;
use utoipa::ToSchema;

pub use crate::shared::api::ErrorDetail;

#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}
