use async_trait::async_trait;
use bytes::Bytes;

use crate::portfolio::application::domain::{
    entities::GalleryImage, policies::GalleryUploadPolicy,
};

//
// ──────────────────────────────────────────────────────────
// Upload Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct UploadGalleryImageCommand {
    file_name: String,
    content_type: String,
    bytes: Bytes,
    caption: Option<String>,
    category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UploadGalleryImageCommandError {
    #[error("File name cannot be empty")]
    EmptyFileName,

    #[error("File name too long")]
    FileNameTooLong,

    #[error("File is empty")]
    EmptyFile,

    #[error("File exceeds the maximum size of {max} bytes")]
    FileTooLarge { max: usize },

    #[error("Unsupported content type '{0}', expected an image")]
    UnsupportedContentType(String),
}

impl UploadGalleryImageCommandError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyFileName => "EMPTY_FILE_NAME",
            Self::FileNameTooLong => "FILE_NAME_TOO_LONG",
            Self::EmptyFile => "EMPTY_FILE",
            Self::FileTooLarge { .. } => "FILE_TOO_LARGE",
            Self::UnsupportedContentType(_) => "UNSUPPORTED_CONTENT_TYPE",
        }
    }
}

impl UploadGalleryImageCommand {
    pub fn new(
        file_name: String,
        content_type: String,
        bytes: Bytes,
        caption: Option<String>,
        category: Option<String>,
        policy: &GalleryUploadPolicy,
    ) -> Result<Self, UploadGalleryImageCommandError> {
        let file_name = file_name.trim();

        if file_name.is_empty() {
            return Err(UploadGalleryImageCommandError::EmptyFileName);
        }
        if file_name.len() > policy.max_file_name_len {
            return Err(UploadGalleryImageCommandError::FileNameTooLong);
        }
        if bytes.is_empty() {
            return Err(UploadGalleryImageCommandError::EmptyFile);
        }
        if bytes.len() > policy.max_file_size_bytes {
            return Err(UploadGalleryImageCommandError::FileTooLarge {
                max: policy.max_file_size_bytes,
            });
        }
        if !policy.accepts_content_type(&content_type) {
            return Err(UploadGalleryImageCommandError::UnsupportedContentType(
                content_type,
            ));
        }

        Ok(Self {
            file_name: file_name.to_string(),
            content_type,
            bytes,
            caption: caption.filter(|c| !c.trim().is_empty()),
            category: category.filter(|c| !c.trim().is_empty()),
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    pub fn caption(&self) -> Option<&String> {
        self.caption.as_ref()
    }

    pub fn category(&self) -> Option<&String> {
        self.category.as_ref()
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UploadGalleryImageError {
    #[error("Blob upload failed: {0}")]
    UploadFailed(String),

    /// The blob is stored but its record is not; the blob is orphaned.
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UploadGalleryImageUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UploadGalleryImageCommand,
    ) -> Result<GalleryImage, UploadGalleryImageError>;
}
