use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Every non-key column has a default so a partial upsert can create the row.
        manager
            .create_table(
                Table::create()
                    .table(Profile::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Profile::Id)
                            .string_len(32)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Profile::Name).text().not_null().default(""))
                    .col(ColumnDef::new(Profile::Title).text().not_null().default(""))
                    .col(
                        ColumnDef::new(Profile::Department)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Profile::University)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Profile::Bio).text())
                    .col(
                        ColumnDef::new(Profile::Qualifications)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(ColumnDef::new(Profile::Experience).text())
                    .col(ColumnDef::new(Profile::YearsOfExperience).integer())
                    .col(
                        ColumnDef::new(Profile::Specialization)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Profile::Achievements)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(ColumnDef::new(Profile::ResearchInterests).text())
                    .col(ColumnDef::new(Profile::Email).text())
                    .col(ColumnDef::new(Profile::Phone).text())
                    .col(ColumnDef::new(Profile::Address).text())
                    .col(ColumnDef::new(Profile::ProfileImage).text())
                    .col(ColumnDef::new(Profile::LinkedinUrl).text())
                    .col(ColumnDef::new(Profile::CollegeUrl).text())
                    .col(ColumnDef::new(Profile::ScholarsCount).integer())
                    .col(
                        ColumnDef::new(Profile::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Singleton: the only admissible key is 'main'
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE profile
                ADD CONSTRAINT chk_profile_singleton CHECK (id = 'main');
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Profile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Profile {
    Table,
    Id,
    Name,
    Title,
    Department,
    University,
    Bio,
    Qualifications,
    Experience,
    YearsOfExperience,
    Specialization,
    Achievements,
    ResearchInterests,
    Email,
    Phone,
    Address,
    ProfileImage,
    LinkedinUrl,
    CollegeUrl,
    ScholarsCount,
    UpdatedAt,
}
