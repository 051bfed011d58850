use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Grants::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Grants::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Grants::Title).text().not_null())
                    .col(ColumnDef::new(Grants::FundingAgency).text().not_null())
                    .col(ColumnDef::new(Grants::Amount).text())
                    .col(ColumnDef::new(Grants::Period).text().not_null())
                    .col(ColumnDef::new(Grants::Status).string_len(16).not_null())
                    .col(ColumnDef::new(Grants::Description).text())
                    .col(
                        ColumnDef::new(Grants::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // status is the only controlled vocabulary on this table
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE grants
                ADD CONSTRAINT chk_grants_status CHECK (status IN ('completed', 'ongoing'));
                "#,
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Grants::Table)
                    .name("idx_grants_created_at")
                    .col(Grants::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Grants::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Grants {
    Table,
    Id,
    Title,
    FundingAgency,
    Amount,
    Period,
    Status,
    Description,
    CreatedAt,
}
