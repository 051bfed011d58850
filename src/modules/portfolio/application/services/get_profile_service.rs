use async_trait::async_trait;

use crate::portfolio::application::{
    domain::{policies::ReadFailurePolicy, profile::ProfileData},
    ports::{
        incoming::use_cases::{GetProfileError, GetProfileUseCase},
        outgoing::ProfileRepository,
    },
};

#[derive(Debug, Clone)]
pub struct GetProfileService<P>
where
    P: ProfileRepository,
{
    repository: P,
    policy: ReadFailurePolicy,
}

impl<P> GetProfileService<P>
where
    P: ProfileRepository,
{
    pub fn new(repository: P, policy: ReadFailurePolicy) -> Self {
        Self { repository, policy }
    }
}

#[async_trait]
impl<P> GetProfileUseCase for GetProfileService<P>
where
    P: ProfileRepository,
{
    async fn execute(&self) -> Result<Option<ProfileData>, GetProfileError> {
        match self.repository.get().await {
            Ok(profile) => Ok(profile),
            Err(e) => {
                tracing::error!("Error fetching profile: {}", e);
                match self.policy {
                    ReadFailurePolicy::EmptyOnError => Ok(None),
                    ReadFailurePolicy::Propagate => {
                        Err(GetProfileError::BackendUnavailable(e.to_string()))
                    }
                }
            }
        }
    }
}
