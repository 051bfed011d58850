use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::portfolio::adapter::outgoing::document::{DocumentClient, DocumentClientError};

/// Hash-of-hashes stand-in for the Redis document store.
#[derive(Default)]
pub struct InMemoryDocumentClient {
    collections: Mutex<HashMap<String, HashMap<String, String>>>,
    failure: Mutex<Option<String>>,
}

impl InMemoryDocumentClient {
    /// Every later call fails with a command error carrying `message`.
    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    pub fn recover(&self) {
        *self.failure.lock().unwrap() = None;
    }

    pub fn insert_raw(&self, collection: &str, id: &str, body: &str) {
        self.collections
            .lock()
            .unwrap()
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), body.to_string());
    }

    pub fn raw(&self, collection: &str, id: &str) -> Option<String> {
        self.collections
            .lock()
            .unwrap()
            .get(collection)
            .and_then(|docs| docs.get(id).cloned())
    }

    pub fn len(&self, collection: &str) -> usize {
        self.collections
            .lock()
            .unwrap()
            .get(collection)
            .map_or(0, HashMap::len)
    }

    fn check(&self) -> Result<(), DocumentClientError> {
        match self.failure.lock().unwrap().as_ref() {
            Some(message) => Err(DocumentClientError::Command(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DocumentClient for InMemoryDocumentClient {
    async fn get_all(
        &self,
        collection: &str,
    ) -> Result<HashMap<String, String>, DocumentClientError> {
        self.check()?;
        Ok(self
            .collections
            .lock()
            .unwrap()
            .get(collection)
            .cloned()
            .unwrap_or_default())
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<String>, DocumentClientError> {
        self.check()?;
        Ok(self.raw(collection, id))
    }

    async fn put(
        &self,
        collection: &str,
        id: &str,
        document: String,
    ) -> Result<(), DocumentClientError> {
        self.check()?;
        self.insert_raw(collection, id, &document);
        Ok(())
    }

    async fn remove(&self, collection: &str, id: &str) -> Result<(), DocumentClientError> {
        self.check()?;
        if let Some(docs) = self.collections.lock().unwrap().get_mut(collection) {
            docs.remove(id);
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), DocumentClientError> {
        self.check()
    }
}
