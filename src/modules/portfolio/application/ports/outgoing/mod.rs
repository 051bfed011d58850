mod blob_storage;
mod profile_repository;
mod record_repository;

pub use blob_storage::{BlobStorage, BlobStorageError};
pub use profile_repository::{ProfileRepository, ProfileRepositoryError};
pub use record_repository::{RecordRepository, RecordRepositoryError};
