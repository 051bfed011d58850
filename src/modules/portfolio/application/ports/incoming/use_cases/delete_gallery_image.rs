use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeleteGalleryImageError {
    /// Nothing was removed; the record still points at the blob.
    #[error("Blob delete failed: {0}")]
    BlobDeleteFailed(String),

    /// The blob may already be gone while the record survives.
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteGalleryImageUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteGalleryImageError>;
}
