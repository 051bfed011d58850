use std::sync::Arc;

use actix_web::web;

use crate::admin::adapter::outgoing::Sha256DigestAuthorizer;
use crate::admin::application::ports::outgoing::AdminAuthorizer;
use crate::document_use_cases;
use crate::portfolio::adapter::outgoing::document::DocumentClient;
use crate::portfolio::application::domain::policies::{GalleryUploadPolicy, ReadFailurePolicy};
use crate::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::portfolio::application::ports::outgoing::BlobStorage;
use crate::tests::support::blob_storage::RecordingBlobStorage;
use crate::tests::support::document_store::InMemoryDocumentClient;
use crate::AppState;

pub const ADMIN_TOKEN: &str = "owner-secret";

pub fn admin_header() -> (&'static str, String) {
    ("Authorization", format!("Bearer {ADMIN_TOKEN}"))
}

pub fn admin_authorizer() -> web::Data<Arc<dyn AdminAuthorizer>> {
    let authorizer: Arc<dyn AdminAuthorizer> =
        Arc::new(Sha256DigestAuthorizer::from_token(ADMIN_TOKEN));
    web::Data::new(authorizer)
}

/// The real use cases over an in-memory document store and blob storage.
pub struct TestAppStateBuilder {
    store: Arc<InMemoryDocumentClient>,
    storage: Arc<RecordingBlobStorage>,
    read_failure_policy: ReadFailurePolicy,
    upload_policy: GalleryUploadPolicy,
    overrides: Vec<Box<dyn FnOnce(&mut PortfolioUseCases)>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            store: Arc::new(InMemoryDocumentClient::default()),
            storage: Arc::new(RecordingBlobStorage::default()),
            read_failure_policy: ReadFailurePolicy::EmptyOnError,
            upload_policy: GalleryUploadPolicy::default(),
            overrides: Vec::new(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_read_failure_policy(mut self, policy: ReadFailurePolicy) -> Self {
        self.read_failure_policy = policy;
        self
    }

    pub fn with_upload_limit(mut self, max_file_size_bytes: usize) -> Self {
        self.upload_policy = GalleryUploadPolicy::new(max_file_size_bytes);
        self
    }

    /// Swaps individual use cases after wiring, e.g. for a failing mock.
    pub fn with_portfolio(mut self, f: impl FnOnce(&mut PortfolioUseCases) + 'static) -> Self {
        self.overrides.push(Box::new(f));
        self
    }

    pub fn store(&self) -> Arc<InMemoryDocumentClient> {
        Arc::clone(&self.store)
    }

    pub fn storage(&self) -> Arc<RecordingBlobStorage> {
        Arc::clone(&self.storage)
    }

    pub fn build(self) -> web::Data<AppState> {
        let client: Arc<dyn DocumentClient> = self.store;
        let storage: Arc<dyn BlobStorage> = self.storage;

        let mut portfolio = document_use_cases(
            client,
            storage,
            self.read_failure_policy,
            self.upload_policy,
        );
        for apply in self.overrides {
            apply(&mut portfolio);
        }

        web::Data::new(AppState { portfolio })
    }
}
