use async_trait::async_trait;
use uuid::Uuid;

use crate::portfolio::application::domain::record::PortfolioRecord;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeleteRecordError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteRecordUseCase<R>: Send + Sync
where
    R: PortfolioRecord,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteRecordError>;
}
