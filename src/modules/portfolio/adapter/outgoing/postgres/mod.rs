mod profile_repository_postgres;
mod record_repository_postgres;
pub mod sea_orm_entity;
pub mod tables;

pub use profile_repository_postgres::ProfileRepositoryPostgres;
pub use record_repository_postgres::RecordRepositoryPostgres;
