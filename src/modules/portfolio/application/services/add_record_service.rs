use async_trait::async_trait;

use crate::portfolio::application::{
    domain::record::{PortfolioRecord, RecordDraft},
    ports::{
        incoming::use_cases::{AddRecordError, AddRecordUseCase},
        outgoing::RecordRepository,
    },
};

#[derive(Debug, Clone)]
pub struct AddRecordService<Repo> {
    repository: Repo,
}

impl<Repo> AddRecordService<Repo> {
    pub fn new(repository: Repo) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R, Repo> AddRecordUseCase<R> for AddRecordService<Repo>
where
    R: PortfolioRecord,
    Repo: RecordRepository<R>,
{
    async fn execute(&self, draft: R::Draft) -> Result<R, AddRecordError> {
        draft.validate()?;

        self.repository.add(draft).await.map_err(|e| {
            tracing::error!("Error adding {}: {}", R::KIND.label, e);
            AddRecordError::RepositoryError(e.to_string())
        })
    }
}
