pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_grants_table;
mod m20261001_000002_create_publications_table;
mod m20261001_000003_create_admin_roles_table;
mod m20261001_000004_create_patents_table;
mod m20261001_000005_create_awards_table;
mod m20261001_000006_create_events_table;
mod m20261001_000007_create_gallery_table;
mod m20261001_000008_create_profile_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_grants_table::Migration),
            Box::new(m20261001_000002_create_publications_table::Migration),
            Box::new(m20261001_000003_create_admin_roles_table::Migration),
            Box::new(m20261001_000004_create_patents_table::Migration),
            Box::new(m20261001_000005_create_awards_table::Migration),
            Box::new(m20261001_000006_create_events_table::Migration),
            Box::new(m20261001_000007_create_gallery_table::Migration),
            Box::new(m20261001_000008_create_profile_table::Migration),
        ]
    }
}
