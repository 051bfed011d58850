use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Publications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Publications::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Publications::Title).text().not_null())
                    .col(ColumnDef::new(Publications::Authors).text().not_null())
                    .col(ColumnDef::new(Publications::Journal).text().not_null())
                    .col(ColumnDef::new(Publications::Year).integer().not_null())
                    .col(ColumnDef::new(Publications::Doi).text())
                    .col(ColumnDef::new(Publications::Link).text())
                    .col(
                        ColumnDef::new(Publications::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Publications::Table)
                    .name("idx_publications_year")
                    .col(Publications::Year)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Publications::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Publications {
    Table,
    Id,
    Title,
    Authors,
    Journal,
    Year,
    Doi,
    Link,
    CreatedAt,
}
