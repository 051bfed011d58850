use actix_web::{get, web, HttpResponse, Responder};
use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use std::sync::Arc;

use crate::portfolio::adapter::outgoing::document::DocumentClient;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    backend: &'static str,
    backend_status: &'static str,
}

/// A cheap round trip to whichever store backs the portfolio.
#[async_trait]
pub trait BackendProbe: Send + Sync {
    fn name(&self) -> &'static str;

    async fn check(&self) -> Result<(), String>;
}

pub struct PostgresProbe {
    db: Arc<DatabaseConnection>,
}

impl PostgresProbe {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BackendProbe for PostgresProbe {
    fn name(&self) -> &'static str {
        "postgres"
    }

    async fn check(&self) -> Result<(), String> {
        self.db
            .execute(Statement::from_string(
                self.db.get_database_backend(),
                "SELECT 1",
            ))
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}

pub struct DocumentStoreProbe {
    client: Arc<dyn DocumentClient>,
}

impl DocumentStoreProbe {
    pub fn new(client: Arc<dyn DocumentClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BackendProbe for DocumentStoreProbe {
    fn name(&self) -> &'static str {
        "redis"
    }

    async fn check(&self) -> Result<(), String> {
        self.client.ping().await.map_err(|e| e.to_string())
    }
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Round trip to the configured backend
#[get("/ready")]
pub async fn readiness(probe: web::Data<Arc<dyn BackendProbe>>) -> impl Responder {
    match probe.check().await {
        Ok(()) => HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            backend: probe.name(),
            backend_status: "ok",
        }),
        Err(e) => {
            tracing::warn!("Readiness check against {} failed: {}", probe.name(), e);
            HttpResponse::ServiceUnavailable().json(ReadinessResponse {
                status: "unhealthy",
                backend: probe.name(),
                backend_status: "unhealthy",
            })
        }
    }
}
