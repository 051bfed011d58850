use async_trait::async_trait;

use crate::portfolio::application::domain::profile::ProfileData;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetProfileError {
    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),
}

#[async_trait]
pub trait GetProfileUseCase: Send + Sync {
    async fn execute(&self) -> Result<Option<ProfileData>, GetProfileError>;
}
