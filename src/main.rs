pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::admin;
pub use modules::portfolio;

use crate::admin::adapter::outgoing::Sha256DigestAuthorizer;
use crate::admin::application::ports::outgoing::AdminAuthorizer;
use crate::api::openapi::ApiDoc;
use crate::health::{BackendProbe, DocumentStoreProbe, PostgresProbe};
use crate::portfolio::adapter::outgoing::{
    document::{
        DocumentClient, ProfileRepositoryDocument, RecordRepositoryDocument, RedisDocumentClient,
    },
    postgres::{
        tables::{
            AdminRolesTable, AwardsTable, EventsTable, GalleryTable, GrantsTable, PatentsTable,
            PublicationsTable,
        },
        ProfileRepositoryPostgres, RecordRepositoryPostgres,
    },
    storage::{FirebaseBlobStorage, SupabaseBlobStorage},
};
use crate::portfolio::application::domain::{
    entities::{AdminRole, Award, Event, GalleryImage, Grant, Patent, Publication},
    policies::{GalleryUploadPolicy, ReadFailurePolicy},
};
use crate::portfolio::application::ports::outgoing::BlobStorage;
use crate::portfolio::application::portfolio_use_cases::{
    PortfolioRepositories, PortfolioUseCases,
};
use crate::shared::api::{custom_json_config, custom_path_config, custom_query_config};
use crate::shared::config::{AdminTokenConfig, AppConfig, BackendConfig, BlobStorageConfig};

use actix_web::{web, App, HttpServer};
use deadpool_redis::{Config, Runtime};
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub portfolio: PortfolioUseCases,
}

fn startup_error(context: &str, e: impl std::fmt::Display) -> std::io::Error {
    tracing::error!("{}: {}", context, e);
    std::io::Error::other(format!("{context}: {e}"))
}

fn build_storage(config: &BlobStorageConfig) -> Arc<dyn BlobStorage> {
    match config {
        BlobStorageConfig::Firebase { bucket } => {
            info!("Gallery blobs go to Firebase bucket {}", bucket);
            Arc::new(FirebaseBlobStorage::new(bucket.clone()))
        }
        BlobStorageConfig::Supabase {
            url,
            service_key,
            bucket,
        } => {
            info!("Gallery blobs go to Supabase bucket {}", bucket);
            Arc::new(SupabaseBlobStorage::new(
                url.clone(),
                bucket.clone(),
                service_key.clone(),
            ))
        }
    }
}

fn build_authorizer(config: &AdminTokenConfig) -> Arc<dyn AdminAuthorizer> {
    match config {
        AdminTokenConfig::Sha256Digest(digest) => {
            Arc::new(Sha256DigestAuthorizer::from_digest(digest))
        }
        AdminTokenConfig::PlainToken(token) => {
            tracing::warn!("ADMIN_TOKEN is set in plain text; prefer ADMIN_TOKEN_SHA256");
            Arc::new(Sha256DigestAuthorizer::from_token(token))
        }
    }
}

#[cfg(not(tarpaulin_include))]
async fn build_portfolio(
    config: &AppConfig,
    storage: Arc<dyn BlobStorage>,
) -> std::io::Result<(PortfolioUseCases, Arc<dyn BackendProbe>)> {
    let policy = config.read_failure_policy;
    let upload_policy = config.upload_policy.clone();

    match &config.backend {
        BackendConfig::Relational { database_url } => {
            let mut opt = ConnectOptions::new(database_url.clone());
            opt.max_connections(20)
                .min_connections(2)
                .connect_timeout(Duration::from_secs(5))
                .acquire_timeout(Duration::from_secs(5))
                .idle_timeout(Duration::from_secs(300))
                .max_lifetime(Duration::from_secs(1800))
                .sqlx_logging(false);

            let conn = Database::connect(opt)
                .await
                .map_err(|e| startup_error("Failed to connect to database", e))?;

            if config.run_migrations {
                info!("Running migrations...");
                migration::Migrator::up(&conn, None)
                    .await
                    .map_err(|e| startup_error("Migrations failed", e))?;
            }

            let db = Arc::new(conn);
            let repositories = PortfolioRepositories {
                grants: RecordRepositoryPostgres::<GrantsTable>::new(Arc::clone(&db)),
                publications: RecordRepositoryPostgres::<PublicationsTable>::new(Arc::clone(&db)),
                admin_roles: RecordRepositoryPostgres::<AdminRolesTable>::new(Arc::clone(&db)),
                patents: RecordRepositoryPostgres::<PatentsTable>::new(Arc::clone(&db)),
                awards: RecordRepositoryPostgres::<AwardsTable>::new(Arc::clone(&db)),
                events: RecordRepositoryPostgres::<EventsTable>::new(Arc::clone(&db)),
                gallery: RecordRepositoryPostgres::<GalleryTable>::new(Arc::clone(&db)),
                profile: ProfileRepositoryPostgres::new(Arc::clone(&db)),
            };

            let use_cases = PortfolioUseCases::wire(repositories, storage, policy, upload_policy);
            Ok((use_cases, Arc::new(PostgresProbe::new(db))))
        }

        BackendConfig::Document {
            redis_url,
            key_prefix,
        } => {
            let pool = Config::from_url(redis_url)
                .create_pool(Some(Runtime::Tokio1))
                .map_err(|e| startup_error("Failed to create Redis pool", e))?;

            let client: Arc<dyn DocumentClient> =
                Arc::new(RedisDocumentClient::new(Arc::new(pool), key_prefix.clone()));
            let use_cases =
                document_use_cases(Arc::clone(&client), storage, policy, upload_policy);
            Ok((use_cases, Arc::new(DocumentStoreProbe::new(client))))
        }
    }
}

/// Use cases over any document client; tests pass an in-memory one.
pub fn document_use_cases(
    client: Arc<dyn DocumentClient>,
    storage: Arc<dyn BlobStorage>,
    policy: ReadFailurePolicy,
    upload_policy: GalleryUploadPolicy,
) -> PortfolioUseCases {
    let repositories = PortfolioRepositories {
        grants: RecordRepositoryDocument::<Grant>::new(Arc::clone(&client)),
        publications: RecordRepositoryDocument::<Publication>::new(Arc::clone(&client)),
        admin_roles: RecordRepositoryDocument::<AdminRole>::new(Arc::clone(&client)),
        patents: RecordRepositoryDocument::<Patent>::new(Arc::clone(&client)),
        awards: RecordRepositoryDocument::<Award>::new(Arc::clone(&client)),
        events: RecordRepositoryDocument::<Event>::new(Arc::clone(&client)),
        gallery: RecordRepositoryDocument::<GalleryImage>::new(Arc::clone(&client)),
        profile: ProfileRepositoryDocument::new(client),
    };

    PortfolioUseCases::wire(repositories, storage, policy, upload_policy)
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    // Environment variable loading: .env.{RUST_ENV} first, then .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        tracing::debug!("A rustls crypto provider was already installed");
    }

    let config = AppConfig::from_env().map_err(|e| startup_error("Invalid configuration", e))?;

    let storage = build_storage(&config.blob_storage);
    let authorizer = build_authorizer(&config.admin_token);
    let (portfolio, probe) = build_portfolio(&config, storage).await?;

    let state = AppState { portfolio };
    let server_url = config.server_url();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&authorizer)))
            .app_data(web::Data::new(Arc::clone(&probe)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .app_data(custom_path_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Profile
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_profile_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::upsert_profile_handler);
    // Gallery upload
    cfg.service(crate::portfolio::adapter::incoming::web::routes::upload_gallery_image_handler);
    // Collections
    crate::portfolio::adapter::incoming::web::routes::configure_collections(cfg);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
