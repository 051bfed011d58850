pub mod document;
pub mod postgres;
pub mod storage;
