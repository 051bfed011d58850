use async_trait::async_trait;
use uuid::Uuid;

use crate::portfolio::application::{
    domain::entities::GalleryImage,
    ports::{
        incoming::use_cases::{
            DeleteGalleryImageError, DeleteGalleryImageUseCase, DeleteRecordError,
            DeleteRecordUseCase,
        },
        outgoing::{BlobStorage, RecordRepository},
    },
};

/// Removes the blob first, then the record. If the second step fails the
/// record outlives its blob.
#[derive(Debug, Clone)]
pub struct DeleteGalleryImageService<Repo, B> {
    repository: Repo,
    storage: B,
}

impl<Repo, B> DeleteGalleryImageService<Repo, B>
where
    Repo: RecordRepository<GalleryImage>,
    B: BlobStorage,
{
    pub fn new(repository: Repo, storage: B) -> Self {
        Self {
            repository,
            storage,
        }
    }
}

#[async_trait]
impl<Repo, B> DeleteGalleryImageUseCase for DeleteGalleryImageService<Repo, B>
where
    Repo: RecordRepository<GalleryImage>,
    B: BlobStorage,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteGalleryImageError> {
        let image = self.repository.get(id).await.map_err(|e| {
            tracing::error!("Error deleting gallery image {}: {}", id, e);
            DeleteGalleryImageError::RepositoryError(e.to_string())
        })?;

        // Already gone
        let Some(image) = image else {
            return Ok(());
        };

        self.storage.delete(&image.url).await.map_err(|e| {
            tracing::error!("Error deleting blob {}: {}", image.url, e);
            DeleteGalleryImageError::BlobDeleteFailed(e.to_string())
        })?;

        self.repository.delete(id).await.map_err(|e| {
            tracing::error!(
                "Error deleting gallery image {} after its blob was removed: {}",
                id,
                e
            );
            DeleteGalleryImageError::RepositoryError(e.to_string())
        })
    }
}

/// Lets the generic record routes and admin page delete gallery images
/// together with their blobs.
#[async_trait]
impl<Repo, B> DeleteRecordUseCase<GalleryImage> for DeleteGalleryImageService<Repo, B>
where
    Repo: RecordRepository<GalleryImage>,
    B: BlobStorage,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteRecordError> {
        DeleteGalleryImageUseCase::execute(self, id)
            .await
            .map_err(|e| DeleteRecordError::RepositoryError(e.to_string()))
    }
}
