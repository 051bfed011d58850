pub mod document_client;
mod profile_repository_document;
mod record_repository_document;

pub use document_client::{DocumentClient, DocumentClientError, RedisDocumentClient};
pub use profile_repository_document::ProfileRepositoryDocument;
pub use record_repository_document::RecordRepositoryDocument;
