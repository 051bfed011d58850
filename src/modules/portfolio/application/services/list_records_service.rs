use async_trait::async_trait;

use crate::portfolio::application::{
    domain::{policies::ReadFailurePolicy, record::PortfolioRecord},
    ports::{
        incoming::use_cases::{ListRecordsError, ListRecordsUseCase},
        outgoing::RecordRepository,
    },
};

#[derive(Debug, Clone)]
pub struct ListRecordsService<Repo> {
    repository: Repo,
    policy: ReadFailurePolicy,
}

impl<Repo> ListRecordsService<Repo> {
    pub fn new(repository: Repo, policy: ReadFailurePolicy) -> Self {
        Self { repository, policy }
    }
}

#[async_trait]
impl<R, Repo> ListRecordsUseCase<R> for ListRecordsService<Repo>
where
    R: PortfolioRecord,
    Repo: RecordRepository<R>,
{
    async fn execute(&self) -> Result<Vec<R>, ListRecordsError> {
        match self.repository.list().await {
            Ok(records) => Ok(records),
            Err(e) => {
                tracing::error!("Error fetching {}: {}", R::KIND.route, e);
                match self.policy {
                    ReadFailurePolicy::EmptyOnError => Ok(Vec::new()),
                    ReadFailurePolicy::Propagate => {
                        Err(ListRecordsError::BackendUnavailable(e.to_string()))
                    }
                }
            }
        }
    }
}
