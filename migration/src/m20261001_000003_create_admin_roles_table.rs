use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AdminRoles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AdminRoles::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(AdminRoles::Title).text().not_null())
                    .col(ColumnDef::new(AdminRoles::Organization).text().not_null())
                    .col(ColumnDef::new(AdminRoles::Period).text().not_null())
                    .col(ColumnDef::new(AdminRoles::Description).text())
                    .col(
                        ColumnDef::new(AdminRoles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AdminRoles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AdminRoles {
    Table,
    Id,
    Title,
    Organization,
    Period,
    Description,
    CreatedAt,
}
