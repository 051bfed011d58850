use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;

use crate::portfolio::application::ports::outgoing::{BlobStorage, BlobStorageError};

pub const BLOB_HOST: &str = "https://blobs.test/";

/// Blob storage that keeps uploads in memory and records deletes.
#[derive(Default)]
pub struct RecordingBlobStorage {
    objects: Mutex<Vec<(String, Bytes, String)>>,
    deleted: Mutex<Vec<String>>,
    fail_uploads: Mutex<bool>,
    fail_deletes: Mutex<bool>,
}

impl RecordingBlobStorage {
    pub fn fail_uploads(&self) {
        *self.fail_uploads.lock().unwrap() = true;
    }

    pub fn fail_deletes(&self) {
        *self.fail_deletes.lock().unwrap() = true;
    }

    /// Object names currently stored.
    pub fn objects(&self) -> Vec<String> {
        self.objects
            .lock()
            .unwrap()
            .iter()
            .map(|(name, _, _)| name.clone())
            .collect()
    }

    pub fn content_type_of(&self, object: &str) -> Option<String> {
        self.objects
            .lock()
            .unwrap()
            .iter()
            .find(|(name, _, _)| name == object)
            .map(|(_, _, content_type)| content_type.clone())
    }

    pub fn deleted(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl BlobStorage for RecordingBlobStorage {
    async fn upload(
        &self,
        object: &str,
        bytes: Bytes,
        content_type: &str,
    ) -> Result<String, BlobStorageError> {
        if *self.fail_uploads.lock().unwrap() {
            return Err(BlobStorageError::UploadFailed("bucket unavailable".to_string()));
        }
        self.objects
            .lock()
            .unwrap()
            .push((object.to_string(), bytes, content_type.to_string()));
        Ok(format!("{BLOB_HOST}{object}"))
    }

    async fn delete(&self, url: &str) -> Result<(), BlobStorageError> {
        let Some(object) = url.strip_prefix(BLOB_HOST) else {
            return Ok(());
        };
        if *self.fail_deletes.lock().unwrap() {
            return Err(BlobStorageError::DeleteFailed("bucket unavailable".to_string()));
        }
        self.objects.lock().unwrap().retain(|(name, _, _)| name != object);
        self.deleted.lock().unwrap().push(object.to_string());
        Ok(())
    }
}
