use async_trait::async_trait;

use crate::portfolio::application::domain::{
    profile::{ProfileData, ProfilePatch},
    record::RecordValidationError,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpsertProfileError {
    #[error(transparent)]
    Validation(#[from] RecordValidationError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpsertProfileUseCase: Send + Sync {
    async fn execute(&self, patch: ProfilePatch) -> Result<ProfileData, UpsertProfileError>;
}
