// src/modules/portfolio/adapter/outgoing/postgres/record_repository_postgres.rs
use std::{marker::PhantomData, sync::Arc};

use async_trait::async_trait;
use sea_orm::{
    sea_query::NullOrdering, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, Order, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use super::tables::SeaOrmTable;
use crate::portfolio::application::{
    domain::record::{PortfolioRecord, RecordPatch},
    ports::outgoing::{RecordRepository, RecordRepositoryError},
};

fn db_error(e: DbErr) -> RecordRepositoryError {
    RecordRepositoryError::DatabaseError(e.to_string())
}

/// One table, mapped through `T`.
pub struct RecordRepositoryPostgres<T: SeaOrmTable> {
    db: Arc<DatabaseConnection>,
    _table: PhantomData<fn() -> T>,
}

impl<T: SeaOrmTable> RecordRepositoryPostgres<T> {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            db,
            _table: PhantomData,
        }
    }
}

impl<T: SeaOrmTable> Clone for RecordRepositoryPostgres<T> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.db))
    }
}

#[async_trait]
impl<T> RecordRepository<T::Record> for RecordRepositoryPostgres<T>
where
    T: SeaOrmTable,
    <T::Entity as EntityTrait>::Model: IntoActiveModel<T::ActiveModel>,
{
    async fn list(&self) -> Result<Vec<T::Record>, RecordRepositoryError> {
        let models = T::Entity::find()
            .order_by_with_nulls(T::order_column(), Order::Desc, NullOrdering::Last)
            .all(&*self.db)
            .await
            .map_err(db_error)?;

        models.into_iter().map(T::to_record).collect()
    }

    async fn get(&self, id: Uuid) -> Result<Option<T::Record>, RecordRepositoryError> {
        T::Entity::find()
            .filter(T::id_column().eq(id))
            .one(&*self.db)
            .await
            .map_err(db_error)?
            .map(T::to_record)
            .transpose()
    }

    async fn add(
        &self,
        draft: <T::Record as PortfolioRecord>::Draft,
    ) -> Result<T::Record, RecordRepositoryError> {
        let inserted = T::insert_model(Uuid::new_v4(), draft)
            .insert(&*self.db)
            .await
            .map_err(db_error)?;

        T::to_record(inserted)
    }

    async fn update(
        &self,
        id: Uuid,
        patch: <T::Record as PortfolioRecord>::Patch,
    ) -> Result<T::Record, RecordRepositoryError> {
        if patch.is_empty() {
            return self.get(id).await?.ok_or(RecordRepositoryError::NotFound);
        }

        let updated = T::Entity::update_many()
            .set(T::patch_model(patch))
            .filter(T::id_column().eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(db_error)?;

        match updated.into_iter().next() {
            Some(model) => T::to_record(model),
            None => Err(RecordRepositoryError::NotFound),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), RecordRepositoryError> {
        T::Entity::delete_many()
            .filter(T::id_column().eq(id))
            .exec(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, RuntimeErr};

    use crate::portfolio::adapter::outgoing::postgres::{
        sea_orm_entity::{awards, grants},
        tables::{AwardsTable, GrantsTable},
    };
    use crate::portfolio::application::domain::{
        entities::{Award, Grant, GrantDraft, GrantPatch, GrantStatus},
        patch_field::PatchField,
    };

    fn grant_model(id: Uuid, status: &str) -> grants::Model {
        grants::Model {
            id,
            title: "Smart Grid Study".to_string(),
            funding_agency: "DST".to_string(),
            amount: None,
            period: "2021-2023".to_string(),
            status: status.to_string(),
            description: None,
            created_at: Utc::now().fixed_offset(),
        }
    }

    fn award_model(year: i32) -> awards::Model {
        awards::Model {
            id: Uuid::new_v4(),
            title: format!("Award {}", year),
            organization: "IEEE".to_string(),
            year,
            description: None,
            created_at: Utc::now().fixed_offset(),
        }
    }

    fn grants_repo(db: MockDatabase) -> RecordRepositoryPostgres<GrantsTable> {
        RecordRepositoryPostgres::new(Arc::new(db.into_connection()))
    }

    #[tokio::test]
    async fn list_orders_by_designated_column() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![award_model(2024), award_model(2018)]])
            .into_connection();
        let repo = RecordRepositoryPostgres::<AwardsTable>::new(Arc::new(db));

        let awards: Vec<Award> = repo.list().await.unwrap();

        assert_eq!(awards.len(), 2);
        assert_eq!(awards[0].year, 2024);

        let log = Arc::try_unwrap(repo.db).unwrap().into_transaction_log();
        let sql = format!("{:?}", log[0]);
        assert!(sql.contains(r#"\"year\" DESC"#), "{}", sql);
    }

    #[tokio::test]
    async fn add_maps_application_fields_to_columns() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![grant_model(id, "ongoing")]]);
        let repo = grants_repo(db);

        let draft = GrantDraft {
            title: "Smart Grid Study".to_string(),
            funding_agency: "DST".to_string(),
            period: "2021-2023".to_string(),
            ..Default::default()
        };
        let grant: Grant = repo.add(draft).await.unwrap();

        assert_eq!(grant.id, id);
        assert_eq!(grant.funding_agency, "DST");
        assert_eq!(grant.status, GrantStatus::Ongoing);

        let log = Arc::try_unwrap(repo.db).unwrap().into_transaction_log();
        let sql = format!("{:?}", log[0]);
        assert!(sql.contains("funding_agency"), "{}", sql);
    }

    #[tokio::test]
    async fn update_returns_the_merged_row() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![grant_model(id, "completed")]]);
        let repo = grants_repo(db);

        let patch = GrantPatch {
            status: PatchField::Value(GrantStatus::Completed),
            ..Default::default()
        };
        let grant: Grant = repo.update(id, patch).await.unwrap();

        assert_eq!(grant.status, GrantStatus::Completed);
        assert_eq!(grant.funding_agency, "DST");

        let log = Arc::try_unwrap(repo.db).unwrap().into_transaction_log();
        let sql = format!("{:?}", log[0]);
        assert!(sql.contains(r#"SET \"status\""#), "{}", sql);
        assert!(!sql.contains(r#"\"funding_agency\" ="#), "{}", sql);
    }

    #[tokio::test]
    async fn update_of_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<grants::Model>::new()]);
        let repo = grants_repo(db);

        let patch = GrantPatch {
            title: PatchField::Value("Renamed".to_string()),
            ..Default::default()
        };
        let result: Result<Grant, _> = repo.update(Uuid::new_v4(), patch).await;

        assert_eq!(result, Err(RecordRepositoryError::NotFound));
    }

    #[tokio::test]
    async fn empty_patch_reads_instead_of_writing() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![grant_model(id, "ongoing")]]);
        let repo = grants_repo(db);

        let grant: Grant = repo.update(id, GrantPatch::default()).await.unwrap();

        assert_eq!(grant.id, id);
        let log = Arc::try_unwrap(repo.db).unwrap().into_transaction_log();
        assert!(format!("{:?}", log[0]).contains("SELECT"));
    }

    #[tokio::test]
    async fn delete_of_missing_row_succeeds() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_exec_results(vec![
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ]);
        let repo = grants_repo(db);

        let result = RecordRepository::<Grant>::delete(&repo, Uuid::new_v4()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn database_errors_are_mapped() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_errors(vec![
            DbErr::Query(RuntimeErr::Internal("connection reset".into())),
        ]);
        let repo = grants_repo(db);

        let result: Result<Vec<Grant>, _> = repo.list().await;

        assert!(matches!(result, Err(RecordRepositoryError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn get_returns_none_for_unknown_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<grants::Model>::new()]);
        let repo = grants_repo(db);

        let found: Option<Grant> = repo.get(Uuid::new_v4()).await.unwrap();

        assert!(found.is_none());
    }
}
