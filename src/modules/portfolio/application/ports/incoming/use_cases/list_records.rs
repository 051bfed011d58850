use async_trait::async_trait;

use crate::portfolio::application::domain::record::PortfolioRecord;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListRecordsError {
    /// Only produced under `ReadFailurePolicy::Propagate`.
    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),
}

#[async_trait]
pub trait ListRecordsUseCase<R>: Send + Sync
where
    R: PortfolioRecord,
{
    async fn execute(&self) -> Result<Vec<R>, ListRecordsError>;
}
