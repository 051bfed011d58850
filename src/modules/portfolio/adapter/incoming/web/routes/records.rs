// src/modules/portfolio/adapter/incoming/web/routes/records.rs
use actix_web::{web, HttpResponse};
use tracing::error;
use uuid::Uuid;

use crate::admin::adapter::incoming::web::extractors::AdminSession;
use crate::portfolio::application::{
    domain::{
        entities::{AdminRole, Award, Event, GalleryImage, Grant, Patent, Publication},
        record::PortfolioRecord,
    },
    ports::incoming::use_cases::{
        AddRecordError, DeleteRecordError, ListRecordsError, UpdateRecordError,
    },
    portfolio_use_cases::{PortfolioUseCases, RecordUseCases},
};
use crate::shared::api::{ApiResponse, FailedOperation};
use crate::AppState;

/// A record type that is served over HTTP from the shared use case bundle.
pub trait PortfolioCollection: PortfolioRecord {
    fn use_cases(portfolio: &PortfolioUseCases) -> &RecordUseCases<Self>;
}

macro_rules! collection {
    ($record:ty, $field:ident) => {
        impl PortfolioCollection for $record {
            fn use_cases(portfolio: &PortfolioUseCases) -> &RecordUseCases<Self> {
                &portfolio.$field
            }
        }
    };
}

collection!(Grant, grants);
collection!(Publication, publications);
collection!(AdminRole, admin_roles);
collection!(Patent, patents);
collection!(Award, awards);
collection!(Event, events);
collection!(GalleryImage, gallery);

//
// ──────────────────────────────────────────────────────────
// Handlers
// ──────────────────────────────────────────────────────────
//

pub async fn list_records_handler<R: PortfolioCollection>(
    data: web::Data<AppState>,
) -> HttpResponse {
    match R::use_cases(&data.portfolio).list.execute().await {
        Ok(records) => ApiResponse::success(records),

        Err(ListRecordsError::BackendUnavailable(e)) => {
            error!("Backend unavailable listing {}: {}", R::KIND.route, e);
            ApiResponse::backend_unavailable(R::KIND.route)
        }
    }
}

pub async fn add_record_handler<R: PortfolioCollection>(
    _admin: AdminSession,
    req: web::Json<R::Draft>,
    data: web::Data<AppState>,
) -> HttpResponse {
    match R::use_cases(&data.portfolio)
        .add
        .execute(req.into_inner())
        .await
    {
        Ok(record) => ApiResponse::created(record),

        Err(AddRecordError::Validation(e)) => ApiResponse::bad_request(e.code(), &e.to_string()),

        Err(AddRecordError::RepositoryError(e)) => {
            error!("Repository error adding {}: {}", R::KIND.label, e);
            ApiResponse::operation_failed(FailedOperation::Saving, R::KIND.label)
        }
    }
}

pub async fn update_record_handler<R: PortfolioCollection>(
    _admin: AdminSession,
    path: web::Path<Uuid>,
    req: web::Json<R::Patch>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let id = path.into_inner();

    match R::use_cases(&data.portfolio)
        .update
        .execute(id, req.into_inner())
        .await
    {
        Ok(record) => ApiResponse::success(record),

        Err(UpdateRecordError::Validation(e)) => {
            ApiResponse::bad_request(e.code(), &e.to_string())
        }

        Err(UpdateRecordError::NotFound) => ApiResponse::not_found(
            "RECORD_NOT_FOUND",
            &format!("No {} with id {}", R::KIND.label, id),
        ),

        Err(UpdateRecordError::RepositoryError(e)) => {
            error!("Repository error updating {} {}: {}", R::KIND.label, id, e);
            ApiResponse::operation_failed(FailedOperation::Saving, R::KIND.label)
        }
    }
}

pub async fn delete_record_handler<R: PortfolioCollection>(
    _admin: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let id = path.into_inner();

    match R::use_cases(&data.portfolio).delete.execute(id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteRecordError::RepositoryError(e)) => {
            error!("Error deleting {} {}: {}", R::KIND.label, id, e);
            ApiResponse::operation_failed(FailedOperation::Deleting, R::KIND.label)
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Registration
// ──────────────────────────────────────────────────────────
//

/// Public list plus admin edit/delete routes for one collection.
///
/// `accepts_json_add` is false for the gallery, whose records are created by
/// the upload route instead.
pub fn configure_collection<R: PortfolioCollection>(
    cfg: &mut web::ServiceConfig,
    accepts_json_add: bool,
) {
    let route = R::KIND.route;

    cfg.service(
        web::resource(format!("/api/{route}")).route(web::get().to(list_records_handler::<R>)),
    );

    if accepts_json_add {
        cfg.service(
            web::resource(format!("/api/admin/{route}"))
                .route(web::post().to(add_record_handler::<R>)),
        );
    }

    cfg.service(
        web::resource(format!("/api/admin/{route}/{{id}}"))
            .route(web::patch().to(update_record_handler::<R>))
            .route(web::delete().to(delete_record_handler::<R>)),
    );
}

pub fn configure_collections(cfg: &mut web::ServiceConfig) {
    configure_collection::<Grant>(cfg, true);
    configure_collection::<Publication>(cfg, true);
    configure_collection::<AdminRole>(cfg, true);
    configure_collection::<Patent>(cfg, true);
    configure_collection::<Award>(cfg, true);
    configure_collection::<Event>(cfg, true);
    configure_collection::<GalleryImage>(cfg, false);
}
