use async_trait::async_trait;

use crate::portfolio::application::domain::record::{PortfolioRecord, RecordValidationError};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AddRecordError {
    #[error(transparent)]
    Validation(#[from] RecordValidationError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AddRecordUseCase<R>: Send + Sync
where
    R: PortfolioRecord,
{
    async fn execute(&self, draft: R::Draft) -> Result<R, AddRecordError>;
}
