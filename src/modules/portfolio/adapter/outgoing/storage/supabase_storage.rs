use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use percent_encoding::percent_decode_str;
use reqwest::header::CONTENT_TYPE;
use serde_json::json;
use url::Url;

use crate::portfolio::application::ports::outgoing::{
    BlobStorage, BlobStorageError,
};

/// Gallery blobs in a Supabase Storage bucket, through its REST API.
#[derive(Clone)]
pub struct SupabaseBlobStorage {
    http: reqwest::Client,
    base_url: String,
    bucket: String,
    service_key: String,
}

impl SupabaseBlobStorage {
    pub fn new(
        base_url: impl Into<String>,
        bucket: impl Into<String>,
        service_key: impl Into<String>,
    ) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            bucket: bucket.into(),
            service_key: service_key.into(),
        }
    }

    fn object_endpoint(&self, object: &str) -> String {
        format!("{}/storage/v1/object/{}/{}", self.base_url, self.bucket, object)
    }

    fn bucket_endpoint(&self) -> String {
        format!("{}/storage/v1/object/{}", self.base_url, self.bucket)
    }

    fn public_url(&self, object: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, self.bucket, object
        )
    }

    /// Object path behind this bucket's public prefix, or `None` for any
    /// other URL.
    fn object_from_url(&self, url: &str) -> Option<String> {
        let mut parsed = Url::parse(url).ok()?;
        parsed.set_query(None);
        parsed.set_fragment(None);

        let prefix = self.public_url("");
        let rest = parsed.as_str().strip_prefix(prefix.as_str())?;
        if rest.is_empty() || rest.split('/').any(|s| s.is_empty() || s == "..") {
            return None;
        }

        percent_decode_str(rest)
            .decode_utf8()
            .ok()
            .map(|object| object.into_owned())
    }
}

#[async_trait]
impl BlobStorage for SupabaseBlobStorage {
    async fn upload(
        &self,
        object: &str,
        bytes: Bytes,
        content_type: &str,
    ) -> Result<String, BlobStorageError> {
        self.http
            .post(self.object_endpoint(object))
            .bearer_auth(&self.service_key)
            .header("apikey", &self.service_key)
            .header("x-upsert", "false")
            .header(CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|e| BlobStorageError::UploadFailed(e.to_string()))?;

        Ok(self.public_url(object))
    }

    async fn delete(&self, url: &str) -> Result<(), BlobStorageError> {
        let Some(object) = self.object_from_url(url) else {
            tracing::warn!(url = %url, "Could not recover storage path from URL, skipping blob delete");
            return Ok(());
        };

        self.http
            .delete(self.bucket_endpoint())
            .bearer_auth(&self.service_key)
            .header("apikey", &self.service_key)
            .json(&json!({ "prefixes": [object] }))
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map(|_| ())
            .map_err(|e| BlobStorageError::DeleteFailed(e.to_string()))
    }
}
