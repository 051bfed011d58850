use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Awards::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Awards::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Awards::Title).text().not_null())
                    .col(ColumnDef::new(Awards::Organization).text().not_null())
                    .col(ColumnDef::new(Awards::Year).integer().not_null())
                    .col(ColumnDef::new(Awards::Description).text())
                    .col(
                        ColumnDef::new(Awards::CreatedAt)
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
            .drop_table(Table::drop().table(Awards::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Awards {
    Table,
    Id,
    Title,
    Organization,
    Year,
    Description,
    CreatedAt,
}
