use async_trait::async_trait;

use crate::portfolio::application::{
    domain::{
        entities::{GalleryImage, GalleryImageDraft},
        media_path::{gallery_object, generate_path},
    },
    ports::{
        incoming::use_cases::{
            UploadGalleryImageCommand, UploadGalleryImageError, UploadGalleryImageUseCase,
        },
        outgoing::{BlobStorage, RecordRepository},
    },
};

/// Uploads the blob, then records its URL. The two writes are not
/// transactional: a failed insert leaves the blob orphaned.
#[derive(Debug, Clone)]
pub struct UploadGalleryImageService<Repo, B> {
    repository: Repo,
    storage: B,
}

impl<Repo, B> UploadGalleryImageService<Repo, B>
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
impl<Repo, B> UploadGalleryImageUseCase for UploadGalleryImageService<Repo, B>
where
    Repo: RecordRepository<GalleryImage>,
    B: BlobStorage,
{
    async fn execute(
        &self,
        command: UploadGalleryImageCommand,
    ) -> Result<GalleryImage, UploadGalleryImageError> {
        let object = gallery_object(&generate_path(command.file_name()));

        let url = self
            .storage
            .upload(&object, command.bytes().clone(), command.content_type())
            .await
            .map_err(|e| {
                tracing::error!("Error uploading image {}: {}", object, e);
                UploadGalleryImageError::UploadFailed(e.to_string())
            })?;

        let draft = GalleryImageDraft {
            url: url.clone(),
            caption: command.caption().cloned(),
            category: command.category().cloned(),
        };

        self.repository.add(draft).await.map_err(|e| {
            tracing::error!("Error adding gallery image, blob {} is orphaned: {}", url, e);
            UploadGalleryImageError::RepositoryError(e.to_string())
        })
    }
}
