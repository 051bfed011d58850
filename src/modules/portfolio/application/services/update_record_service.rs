use async_trait::async_trait;
use uuid::Uuid;

use crate::portfolio::application::{
    domain::record::{PortfolioRecord, RecordPatch},
    ports::{
        incoming::use_cases::{UpdateRecordError, UpdateRecordUseCase},
        outgoing::{RecordRepository, RecordRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct UpdateRecordService<Repo> {
    repository: Repo,
}

impl<Repo> UpdateRecordService<Repo> {
    pub fn new(repository: Repo) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R, Repo> UpdateRecordUseCase<R> for UpdateRecordService<Repo>
where
    R: PortfolioRecord,
    Repo: RecordRepository<R>,
{
    async fn execute(&self, id: Uuid, patch: R::Patch) -> Result<R, UpdateRecordError> {
        patch.validate()?;

        self.repository
            .update(id, patch)
            .await
            .map_err(|e| match e {
                RecordRepositoryError::NotFound => UpdateRecordError::NotFound,
                other => {
                    tracing::error!("Error updating {} {}: {}", R::KIND.label, id, other);
                    UpdateRecordError::RepositoryError(other.to_string())
                }
            })
    }
}
