use async_trait::async_trait;
use uuid::Uuid;

use crate::portfolio::application::domain::record::{PortfolioRecord, RecordValidationError};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpdateRecordError {
    #[error(transparent)]
    Validation(#[from] RecordValidationError),

    #[error("Record not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateRecordUseCase<R>: Send + Sync
where
    R: PortfolioRecord,
{
    async fn execute(&self, id: Uuid, patch: R::Patch) -> Result<R, UpdateRecordError>;
}
