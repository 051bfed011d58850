use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DocumentClientError {
    #[error("Pool error: {0}")]
    Pool(String),

    #[error("Command failed: {0}")]
    Command(String),
}

/// Collections of JSON documents keyed by id.
///
/// The repositories only speak this trait, so the store behind it can be
/// swapped for an in-memory map in tests.
#[async_trait]
pub trait DocumentClient: Send + Sync {
    async fn get_all(&self, collection: &str)
        -> Result<HashMap<String, String>, DocumentClientError>;

    async fn get(&self, collection: &str, id: &str) -> Result<Option<String>, DocumentClientError>;

    async fn put(&self, collection: &str, id: &str, document: String)
        -> Result<(), DocumentClientError>;

    /// Removing an absent id is not an error.
    async fn remove(&self, collection: &str, id: &str) -> Result<(), DocumentClientError>;

    async fn ping(&self) -> Result<(), DocumentClientError>;
}

/// Redis data model: one hash per collection.
///
/// ```text
/// {prefix}:{collection} -> HASH { id -> JSON document }
/// {prefix}:profile      -> HASH { "main" -> JSON document }
/// ```
#[derive(Clone)]
pub struct RedisDocumentClient {
    pool: Arc<Pool>,
    prefix: String,
}

impl RedisDocumentClient {
    pub fn new(pool: Arc<Pool>, prefix: impl Into<String>) -> Self {
        Self {
            pool,
            prefix: prefix.into(),
        }
    }

    fn collection_key(&self, collection: &str) -> String {
        format!("{}:{}", self.prefix, collection)
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, DocumentClientError> {
        self.pool
            .get()
            .await
            .map_err(|e| DocumentClientError::Pool(e.to_string()))
    }
}

fn command_error(e: deadpool_redis::redis::RedisError) -> DocumentClientError {
    DocumentClientError::Command(e.to_string())
}

#[async_trait]
impl DocumentClient for RedisDocumentClient {
    async fn get_all(
        &self,
        collection: &str,
    ) -> Result<HashMap<String, String>, DocumentClientError> {
        let mut conn = self.get_conn().await?;
        conn.hgetall(self.collection_key(collection))
            .await
            .map_err(command_error)
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<String>, DocumentClientError> {
        let mut conn = self.get_conn().await?;
        conn.hget(self.collection_key(collection), id)
            .await
            .map_err(command_error)
    }

    async fn put(
        &self,
        collection: &str,
        id: &str,
        document: String,
    ) -> Result<(), DocumentClientError> {
        let mut conn = self.get_conn().await?;
        conn.hset::<_, _, _, ()>(self.collection_key(collection), id, document)
            .await
            .map_err(command_error)
    }

    async fn remove(&self, collection: &str, id: &str) -> Result<(), DocumentClientError> {
        let mut conn = self.get_conn().await?;
        conn.hdel::<_, _, ()>(self.collection_key(collection), id)
            .await
            .map_err(command_error)
    }

    async fn ping(&self) -> Result<(), DocumentClientError> {
        let mut conn = self.get_conn().await?;
        deadpool_redis::redis::cmd("PING")
            .query_async::<String>(&mut *conn)
            .await
            .map(|_| ())
            .map_err(command_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deadpool_redis::{Config, Runtime};

    #[test]
    fn collections_live_under_the_prefix() {
        let pool = Config::from_url("redis://127.0.0.1:6379")
            .create_pool(Some(Runtime::Tokio1))
            .unwrap();
        let client = RedisDocumentClient::new(Arc::new(pool), "portfolio");

        assert_eq!(client.collection_key("adminRoles"), "portfolio:adminRoles");
        assert_eq!(client.collection_key("profile"), "portfolio:profile");
    }
}
