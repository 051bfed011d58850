use std::sync::Arc;

use async_trait::async_trait;

use super::document_client::DocumentClient;
use crate::portfolio::application::{
    domain::profile::{ProfileData, ProfilePatch, PROFILE_ID},
    ports::outgoing::{ProfileRepository, ProfileRepositoryError},
};

const PROFILE_COLLECTION: &str = "profile";

#[derive(Clone)]
pub struct ProfileRepositoryDocument {
    client: Arc<dyn DocumentClient>,
}

impl ProfileRepositoryDocument {
    pub fn new(client: Arc<dyn DocumentClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryDocument {
    async fn get(&self) -> Result<Option<ProfileData>, ProfileRepositoryError> {
        let raw = self
            .client
            .get(PROFILE_COLLECTION, PROFILE_ID)
            .await
            .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))?;

        raw.map(|body| {
            serde_json::from_str(&body)
                .map_err(|e| ProfileRepositoryError::SerializationError(e.to_string()))
        })
        .transpose()
    }

    async fn upsert(&self, patch: ProfilePatch) -> Result<ProfileData, ProfileRepositoryError> {
        let mut profile = self.get().await?.unwrap_or_default();
        profile.apply_patch(patch);

        let body = serde_json::to_string(&profile)
            .map_err(|e| ProfileRepositoryError::SerializationError(e.to_string()))?;
        self.client
            .put(PROFILE_COLLECTION, PROFILE_ID, body)
            .await
            .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))?;

        Ok(profile)
    }
}
