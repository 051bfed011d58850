use actix_web::{
    dev::Payload, http::header::AUTHORIZATION, web, Error as ActixError, FromRequest,
    HttpRequest, HttpResponse,
};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::admin::application::ports::outgoing::AdminAuthorizer;
use crate::shared::api::ApiResponse;

/// Proof that the request carried the admin bearer token.
#[derive(Debug, Clone, Copy)]
pub struct AdminSession;

fn reject(response: HttpResponse) -> Ready<Result<AdminSession, ActixError>> {
    ready(Err(
        actix_web::error::InternalError::from_response("admin gate", response).into(),
    ))
}

impl FromRequest for AdminSession {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let authorizer = match req.app_data::<web::Data<Arc<dyn AdminAuthorizer>>>() {
            Some(authorizer) => authorizer,
            None => {
                tracing::error!("Admin authorizer is not registered");
                return reject(ApiResponse::internal_error());
            }
        };

        let Some(token) = bearer_token(req) else {
            return reject(ApiResponse::unauthorized(
                "MISSING_AUTH_HEADER",
                "Missing or invalid authorization header",
            ));
        };

        if !authorizer.is_authorized(token) {
            tracing::warn!(path = %req.path(), "Rejected admin request");
            return reject(ApiResponse::unauthorized("INVALID_TOKEN", "Invalid admin token"));
        }

        ready(Ok(AdminSession))
    }
}

/// Token of an `Authorization: Bearer <token>` header; blank counts as absent.
fn bearer_token(req: &HttpRequest) -> Option<&str> {
    let token = req
        .headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")?
        .trim();
    (!token.is_empty()).then_some(token)
}
