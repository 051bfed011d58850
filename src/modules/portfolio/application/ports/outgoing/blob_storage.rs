// src/modules/portfolio/application/ports/outgoing/blob_storage.rs
use async_trait::async_trait;
use bytes::Bytes;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BlobStorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),
}

#[async_trait]
pub trait BlobStorage: Send + Sync {
    /// Stores `bytes` under `object` and returns the public URL.
    async fn upload(
        &self,
        object: &str,
        bytes: Bytes,
        content_type: &str,
    ) -> Result<String, BlobStorageError>;

    /// Removes the blob behind a URL previously returned by `upload`.
    /// A URL this storage cannot parse is skipped, not an error.
    async fn delete(&self, url: &str) -> Result<(), BlobStorageError>;
}

#[async_trait]
impl<T> BlobStorage for std::sync::Arc<T>
where
    T: BlobStorage + ?Sized,
{
    async fn upload(
        &self,
        object: &str,
        bytes: Bytes,
        content_type: &str,
    ) -> Result<String, BlobStorageError> {
        (**self).upload(object, bytes, content_type).await
    }

    async fn delete(&self, url: &str) -> Result<(), BlobStorageError> {
        (**self).delete(url).await
    }
}
