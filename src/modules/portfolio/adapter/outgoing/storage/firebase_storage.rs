use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tokio::sync::OnceCell;
use url::Url;

use crate::portfolio::application::ports::outgoing::{
    BlobStorage, BlobStorageError,
};

const DOWNLOAD_HOST: &str = "https://firebasestorage.googleapis.com";

/// Object names are encoded as a single path segment, slashes included.
const OBJECT_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// google-cloud-storage addresses buckets as `projects/_/buckets/{bucket}`.
fn bucket_resource(bucket: &str) -> String {
    format!("projects/_/buckets/{}", bucket)
}

fn download_url(bucket: &str, object: &str) -> String {
    format!(
        "{}/v0/b/{}/o/{}?alt=media",
        DOWNLOAD_HOST,
        bucket,
        utf8_percent_encode(object, OBJECT_SEGMENT)
    )
}

/// Recovers the object name from a `/v0/b/{bucket}/o/{object}` download path.
fn object_from_url(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let segments: Vec<&str> = parsed.path_segments()?.collect();
    let encoded = match segments.as_slice() {
        ["v0", "b", bucket, "o", object] if !bucket.is_empty() && !object.is_empty() => *object,
        _ => return None,
    };

    percent_decode_str(encoded)
        .decode_utf8()
        .ok()
        .map(|object| object.into_owned())
}

/// Internal seam so the adapter can be tested without a live bucket.
#[async_trait]
trait GcsClient: Send + Sync {
    async fn write_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
        bytes: Bytes,
        content_type: &str,
    ) -> Result<(), String>;

    async fn delete_object(&self, bucket_resource: &str, object_name: &str)
        -> Result<(), String>;
}

#[cfg(test)]
struct ArcGcsClient(Arc<dyn GcsClient>);

#[cfg(test)]
#[async_trait]
impl GcsClient for ArcGcsClient {
    async fn write_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
        bytes: Bytes,
        content_type: &str,
    ) -> Result<(), String> {
        self.0
            .write_object(bucket_resource, object_name, bytes, content_type)
            .await
    }

    async fn delete_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
    ) -> Result<(), String> {
        self.0.delete_object(bucket_resource, object_name).await
    }
}

/// Gallery blobs in a Firebase (Google Cloud Storage) bucket.
#[derive(Clone)]
pub struct FirebaseBlobStorage {
    client: Arc<OnceCell<Box<dyn GcsClient>>>,
    bucket: String,
}

impl FirebaseBlobStorage {
    /// The GCS client is built lazily on first use.
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            client: Arc::new(OnceCell::new()),
            bucket: bucket.into(),
        }
    }

    async fn get_client(&self) -> Result<&dyn GcsClient, Box<dyn std::error::Error + Send + Sync>> {
        self.client
            .get_or_try_init(|| async {
                let real_client = RealGcsClient::new().await?;
                Ok(Box::new(real_client) as Box<dyn GcsClient>)
            })
            .await
            .map(|boxed| &**boxed)
    }

    #[cfg(test)]
    fn with_client(client: Arc<dyn GcsClient>, bucket: &str) -> Self {
        let once = OnceCell::new();
        let _ = once.set(Box::new(ArcGcsClient(client)) as Box<dyn GcsClient>);

        Self {
            client: Arc::new(once),
            bucket: bucket.to_string(),
        }
    }
}

#[async_trait]
impl BlobStorage for FirebaseBlobStorage {
    async fn upload(
        &self,
        object: &str,
        bytes: Bytes,
        content_type: &str,
    ) -> Result<String, BlobStorageError> {
        let client = self
            .get_client()
            .await
            .map_err(|e| BlobStorageError::UploadFailed(e.to_string()))?;

        client
            .write_object(&bucket_resource(&self.bucket), object, bytes, content_type)
            .await
            .map_err(BlobStorageError::UploadFailed)?;

        Ok(download_url(&self.bucket, object))
    }

    async fn delete(&self, url: &str) -> Result<(), BlobStorageError> {
        let Some(object) = object_from_url(url) else {
            tracing::warn!(url = %url, "Could not recover storage path from URL, skipping blob delete");
            return Ok(());
        };

        let client = self
            .get_client()
            .await
            .map_err(|e| BlobStorageError::DeleteFailed(e.to_string()))?;

        client
            .delete_object(&bucket_resource(&self.bucket), &object)
            .await
            .map_err(BlobStorageError::DeleteFailed)
    }
}

// ──────────────────────────────────────────────────────────
// Real Google Cloud Storage client
// ──────────────────────────────────────────────────────────

struct RealGcsClient {
    storage: google_cloud_storage::client::Storage,
    control: google_cloud_storage::client::StorageControl,
}

impl RealGcsClient {
    async fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        tracing::info!("Initializing GCS client...");

        let storage = google_cloud_storage::client::Storage::builder()
            .build()
            .await
            .map_err(|e| {
                tracing::error!("Failed to build GCS storage client: {:?}", e);
                e
            })?;

        let control = google_cloud_storage::client::StorageControl::builder()
            .build()
            .await
            .map_err(|e| {
                tracing::error!("Failed to build GCS control client: {:?}", e);
                e
            })?;

        tracing::info!("GCS clients created");

        Ok(Self { storage, control })
    }
}

#[async_trait]
impl GcsClient for RealGcsClient {
    async fn write_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
        bytes: Bytes,
        content_type: &str,
    ) -> Result<(), String> {
        self.storage
            .write_object(bucket_resource.to_string(), object_name.to_string(), bytes)
            .set_content_type(content_type.to_string())
            .send_buffered()
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    }

    async fn delete_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
    ) -> Result<(), String> {
        self.control
            .delete_object()
            .set_bucket(bucket_resource.to_string())
            .set_object(object_name.to_string())
            .send()
            .await
            .map_err(|e| e.to_string())
    }
}
