use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, DatabaseConnection, DbErr, EntityTrait, NotSet, Set,
    Value,
};

use super::sea_orm_entity::profile::{self, Column};
use crate::portfolio::application::{
    domain::{
        patch_field::PatchField,
        profile::{ProfileData, ProfilePatch, PROFILE_ID},
    },
    ports::outgoing::{ProfileRepository, ProfileRepositoryError},
};

fn db_error(e: DbErr) -> ProfileRepositoryError {
    ProfileRepositoryError::DatabaseError(e.to_string())
}

#[derive(Debug, Clone)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

// ──────────────────────────────────────────────────────────
// Mapping
// ──────────────────────────────────────────────────────────

fn string_list(
    column: &str,
    json: serde_json::Value,
) -> Result<Vec<String>, ProfileRepositoryError> {
    serde_json::from_value(json).map_err(|e| {
        ProfileRepositoryError::SerializationError(format!("{}: {}", column, e))
    })
}

fn to_profile(model: profile::Model) -> Result<ProfileData, ProfileRepositoryError> {
    Ok(ProfileData {
        name: model.name,
        title: model.title,
        department: model.department,
        university: model.university,
        bio: model.bio,
        qualifications: string_list("qualifications", model.qualifications)?,
        experience: model.experience,
        years_of_experience: model.years_of_experience,
        specialization: string_list("specialization", model.specialization)?,
        achievements: string_list("achievements", model.achievements)?,
        research_interests: model.research_interests,
        email: model.email,
        phone: model.phone,
        address: model.address,
        profile_image: model.profile_image,
        linkedin_url: model.linkedin_url,
        college_url: model.college_url,
        scholars_count: model.scholars_count,
    })
}

/// Collects the columns a patch touches so the conflict clause updates
/// exactly those.
#[derive(Default)]
struct Touched(Vec<Column>);

impl Touched {
    fn required<V>(&mut self, column: Column, field: PatchField<V>) -> ActiveValue<V>
    where
        V: Into<Value>,
    {
        match field {
            PatchField::Value(v) => {
                self.0.push(column);
                Set(v)
            }
            PatchField::Unset | PatchField::Null => NotSet,
        }
    }

    fn optional<V>(&mut self, column: Column, field: PatchField<V>) -> ActiveValue<Option<V>>
    where
        Option<V>: Into<Value>,
    {
        match field {
            PatchField::Unset => NotSet,
            PatchField::Null => {
                self.0.push(column);
                Set(None)
            }
            PatchField::Value(v) => {
                self.0.push(column);
                Set(Some(v))
            }
        }
    }

    fn list(
        &mut self,
        column: Column,
        field: PatchField<Vec<String>>,
    ) -> ActiveValue<serde_json::Value> {
        match field {
            PatchField::Value(items) => {
                self.0.push(column);
                Set(serde_json::Value::from(items))
            }
            PatchField::Unset | PatchField::Null => NotSet,
        }
    }
}

fn patch_to_active(patch: ProfilePatch) -> (profile::ActiveModel, Vec<Column>) {
    let mut touched = Touched::default();

    let active = profile::ActiveModel {
        id: Set(PROFILE_ID.to_string()),
        name: touched.required(Column::Name, patch.name),
        title: touched.required(Column::Title, patch.title),
        department: touched.required(Column::Department, patch.department),
        university: touched.required(Column::University, patch.university),
        bio: touched.optional(Column::Bio, patch.bio),
        qualifications: touched.list(Column::Qualifications, patch.qualifications),
        experience: touched.optional(Column::Experience, patch.experience),
        years_of_experience: touched.optional(Column::YearsOfExperience, patch.years_of_experience),
        specialization: touched.list(Column::Specialization, patch.specialization),
        achievements: touched.list(Column::Achievements, patch.achievements),
        research_interests: touched.optional(Column::ResearchInterests, patch.research_interests),
        email: touched.optional(Column::Email, patch.email),
        phone: touched.optional(Column::Phone, patch.phone),
        address: touched.optional(Column::Address, patch.address),
        profile_image: touched.optional(Column::ProfileImage, patch.profile_image),
        linkedin_url: touched.optional(Column::LinkedinUrl, patch.linkedin_url),
        college_url: touched.optional(Column::CollegeUrl, patch.college_url),
        scholars_count: touched.optional(Column::ScholarsCount, patch.scholars_count),
        updated_at: Set(chrono::Utc::now().fixed_offset()),
    };

    let mut columns = touched.0;
    columns.push(Column::UpdatedAt);
    (active, columns)
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn get(&self) -> Result<Option<ProfileData>, ProfileRepositoryError> {
        profile::Entity::find_by_id(PROFILE_ID.to_string())
            .one(&*self.db)
            .await
            .map_err(db_error)?
            .map(to_profile)
            .transpose()
    }

    async fn upsert(&self, patch: ProfilePatch) -> Result<ProfileData, ProfileRepositoryError> {
        let (active, columns) = patch_to_active(patch);

        profile::Entity::insert(active)
            .on_conflict(
                OnConflict::column(Column::Id)
                    .update_columns(columns)
                    .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await
            .map_err(db_error)?;

        self.get().await?.ok_or_else(|| {
            ProfileRepositoryError::DatabaseError("profile row missing after upsert".to_string())
        })
    }
}
