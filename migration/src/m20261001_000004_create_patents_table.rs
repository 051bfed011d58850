use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Patents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Patents::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Patents::Title).text().not_null())
                    .col(ColumnDef::new(Patents::PatentNumber).text())
                    .col(ColumnDef::new(Patents::Area).text().not_null())
                    .col(ColumnDef::new(Patents::Status).string_len(16).not_null())
                    .col(ColumnDef::new(Patents::Year).integer())
                    .col(
                        ColumnDef::new(Patents::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE patents
                ADD CONSTRAINT chk_patents_status CHECK (status IN ('filed', 'granted'));
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Patents::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Patents {
    Table,
    Id,
    Title,
    PatentNumber,
    Area,
    Status,
    Year,
    CreatedAt,
}
