// src/modules/portfolio/application/ports/outgoing/record_repository.rs
use async_trait::async_trait;
use uuid::Uuid;

use crate::portfolio::application::domain::record::PortfolioRecord;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordRepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Stored record could not be decoded: {0}")]
    SerializationError(String),
}

/// Storage of one portfolio collection.
///
/// Implementations assign the id on `add`, return `list` ordered by the
/// collection's designated field (descending) and keep any backend naming
/// scheme to themselves. `delete` of an unknown id is not an error.
#[async_trait]
pub trait RecordRepository<R>: Send + Sync
where
    R: PortfolioRecord,
{
    async fn list(&self) -> Result<Vec<R>, RecordRepositoryError>;

    async fn get(&self, id: Uuid) -> Result<Option<R>, RecordRepositoryError>;

    async fn add(&self, draft: R::Draft) -> Result<R, RecordRepositoryError>;

    async fn update(&self, id: Uuid, patch: R::Patch) -> Result<R, RecordRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), RecordRepositoryError>;
}
