pub mod app_state_builder;
pub mod blob_storage;
pub mod document_store;
pub mod fixtures;
