use async_trait::async_trait;

use crate::portfolio::application::{
    domain::profile::{ProfileData, ProfilePatch},
    ports::{
        incoming::use_cases::{UpsertProfileError, UpsertProfileUseCase},
        outgoing::ProfileRepository,
    },
};

#[derive(Debug, Clone)]
pub struct UpsertProfileService<P>
where
    P: ProfileRepository,
{
    repository: P,
}

impl<P> UpsertProfileService<P>
where
    P: ProfileRepository,
{
    pub fn new(repository: P) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<P> UpsertProfileUseCase for UpsertProfileService<P>
where
    P: ProfileRepository,
{
    async fn execute(&self, patch: ProfilePatch) -> Result<ProfileData, UpsertProfileError> {
        patch.validate()?;

        self.repository.upsert(patch).await.map_err(|e| {
            tracing::error!("Error updating profile: {}", e);
            UpsertProfileError::RepositoryError(e.to_string())
        })
    }
}
