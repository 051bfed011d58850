// src/modules/portfolio/application/ports/outgoing/profile_repository.rs
use async_trait::async_trait;

use crate::portfolio::application::domain::profile::{ProfileData, ProfilePatch};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Stored profile could not be decoded: {0}")]
    SerializationError(String),
}

/// The singleton profile store. Writes are upserts on the fixed key.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn get(&self) -> Result<Option<ProfileData>, ProfileRepositoryError>;

    /// Merges the present fields into the singleton, creating it if needed.
    async fn upsert(&self, patch: ProfilePatch) -> Result<ProfileData, ProfileRepositoryError>;
}
