use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use crate::portfolio::application::domain::{
    entities::{
        AdminRole, AdminRoleDraft, Award, AwardDraft, Event, EventDraft, EventType, GalleryImage,
        GrantStatus, Grant, GrantDraft, Patent, PatentDraft, PatentStatus, Publication,
        PublicationDraft,
    },
    profile::ProfileData,
    record::{PortfolioRecord, RecordKind},
};
use utoipa::openapi::path::{
    HttpMethod, Operation, OperationBuilder, Parameter, ParameterBuilder, ParameterIn, PathItem,
};
use utoipa::openapi::request_body::{RequestBody, RequestBodyBuilder};
use utoipa::openapi::security::{
    HttpAuthScheme, HttpBuilder, SecurityRequirement, SecurityScheme,
};
use utoipa::openapi::{ContentBuilder, Ref, Required, Response};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Academic Portfolio API",
        version = "1.0.0",
        description = "Public portfolio reads and the admin console's write surface",
    ),
    paths(
        crate::portfolio::adapter::incoming::web::routes::get_profile_handler,
        crate::portfolio::adapter::incoming::web::routes::upsert_profile_handler,
        crate::portfolio::adapter::incoming::web::routes::upload_gallery_image_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
            SuccessResponse<ProfileData>,
            ProfileData,
            Grant, GrantDraft, GrantStatus,
            Publication, PublicationDraft,
            AdminRole, AdminRoleDraft,
            Patent, PatentDraft, PatentStatus,
            Award, AwardDraft,
            Event, EventDraft, EventType,
            GalleryImage,
        )
    ),
    modifiers(&SecurityAddon, &CollectionPaths),
    tags(
        (name = "collections", description = "Publications, grants and the other listable collections"),
        (name = "profile", description = "The singleton profile"),
        (name = "gallery", description = "Gallery uploads"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some("The admin token"))
                        .build(),
                ),
            )
        }
    }
}

/// Documents the generic collection routes, which are registered per record
/// type at runtime and so carry no path attributes.
struct CollectionPaths;

struct DocumentedCollection {
    kind: RecordKind,
    record_schema: &'static str,
    draft_schema: Option<&'static str>,
}

fn documented<R: PortfolioRecord>(
    record_schema: &'static str,
    draft_schema: Option<&'static str>,
) -> DocumentedCollection {
    DocumentedCollection {
        kind: R::KIND,
        record_schema,
        draft_schema,
    }
}

fn json_body(schema: &str, description: &str) -> RequestBody {
    RequestBodyBuilder::new()
        .description(Some(description))
        .required(Some(Required::True))
        .content(
            "application/json",
            ContentBuilder::new()
                .schema(Some(Ref::from_schema_name(schema)))
                .build(),
        )
        .build()
}

fn id_param() -> Parameter {
    ParameterBuilder::new()
        .name("id")
        .parameter_in(ParameterIn::Path)
        .required(Required::True)
        .description(Some("Record id (UUID)"))
        .build()
}

fn operation(summary: String) -> OperationBuilder {
    OperationBuilder::new()
        .tags(Some(vec!["collections".to_string()]))
        .summary(Some(summary))
}

fn admin_only(builder: OperationBuilder) -> Operation {
    builder
        .response("401", Response::new("Missing or invalid admin token"))
        .security(SecurityRequirement::new("BearerAuth", Vec::<String>::new()))
        .build()
}

impl utoipa::Modify for CollectionPaths {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let collections = [
            documented::<Grant>("Grant", Some("GrantDraft")),
            documented::<Publication>("Publication", Some("PublicationDraft")),
            documented::<AdminRole>("AdminRole", Some("AdminRoleDraft")),
            documented::<Patent>("Patent", Some("PatentDraft")),
            documented::<Award>("Award", Some("AwardDraft")),
            documented::<Event>("Event", Some("EventDraft")),
            documented::<GalleryImage>("GalleryImage", None),
        ];

        for collection in collections {
            let route = collection.kind.route;
            let label = collection.kind.label;

            let list = operation(format!("List {route}, newest first"))
                .response(
                    "200",
                    Response::new(format!(
                        "Every {label}, as an array of {}",
                        collection.record_schema
                    )),
                )
                .response("503", Response::new("Backend unavailable"))
                .build();
            openapi
                .paths
                .paths
                .insert(format!("/api/{route}"), PathItem::new(HttpMethod::Get, list));

            if let Some(draft) = collection.draft_schema {
                let add = admin_only(
                    operation(format!("Add a {label}"))
                        .request_body(Some(json_body(draft, "Record fields without id")))
                        .response("201", Response::new(format!("The stored {label}")))
                        .response("400", Response::new("Invalid field value"))
                        .response("500", Response::new(format!("Error saving {label}"))),
                );
                openapi
                    .paths
                    .paths
                    .insert(format!("/api/admin/{route}"), PathItem::new(HttpMethod::Post, add));
            }

            let update = admin_only(
                operation(format!("Update some fields of a {label}"))
                    .parameter(id_param())
                    .request_body(Some(json_body(
                        collection.draft_schema.unwrap_or(collection.record_schema),
                        "Any subset of the fields; null clears an optional field",
                    )))
                    .response("200", Response::new(format!("The merged {label}")))
                    .response("400", Response::new("Invalid field value"))
                    .response("404", Response::new("No record with that id"))
                    .response("500", Response::new(format!("Error saving {label}"))),
            );
            let delete = admin_only(
                operation(format!("Delete a {label}"))
                    .parameter(id_param())
                    .response("204", Response::new("Deleted, or never existed"))
                    .response("500", Response::new(format!("Error deleting {label}"))),
            );

            let mut item = PathItem::new(HttpMethod::Patch, update);
            item.delete = Some(delete);
            openapi
                .paths
                .paths
                .insert(format!("/api/admin/{route}/{{id}}"), item);
        }
    }
}
