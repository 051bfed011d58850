use async_trait::async_trait;
use uuid::Uuid;

use crate::portfolio::application::{
    domain::record::PortfolioRecord,
    ports::{
        incoming::use_cases::{DeleteRecordError, DeleteRecordUseCase},
        outgoing::RecordRepository,
    },
};

#[derive(Debug, Clone)]
pub struct DeleteRecordService<Repo> {
    repository: Repo,
}

impl<Repo> DeleteRecordService<Repo> {
    pub fn new(repository: Repo) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R, Repo> DeleteRecordUseCase<R> for DeleteRecordService<Repo>
where
    R: PortfolioRecord,
    Repo: RecordRepository<R>,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteRecordError> {
        self.repository.delete(id).await.map_err(|e| {
            tracing::error!("Error deleting {} {}: {}", R::KIND.label, id, e);
            DeleteRecordError::RepositoryError(e.to_string())
        })
    }
}
