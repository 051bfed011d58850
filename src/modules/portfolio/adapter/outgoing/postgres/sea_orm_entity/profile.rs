use sea_orm::entity::prelude::*;

/// Single-row table; `id` is always "main".
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "profile")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub title: String,
    pub department: String,
    pub university: String,
    pub bio: Option<String>,
    /// JSON array of strings
    pub qualifications: Json,
    pub experience: Option<String>,
    pub years_of_experience: Option<i32>,
    pub specialization: Json,
    pub achievements: Json,
    pub research_interests: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub profile_image: Option<String>,
    pub linkedin_url: Option<String>,
    pub college_url: Option<String>,
    pub scholars_count: Option<i32>,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
