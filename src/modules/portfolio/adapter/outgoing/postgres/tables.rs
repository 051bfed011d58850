//! Field-by-field mapping between the application records and the
//! snake_case tables. Every partial update maps only the keys it carries.

use sea_orm::{ActiveModelBehavior, ActiveModelTrait, ActiveValue, EntityTrait, NotSet, Set, Value};
use uuid::Uuid;

use super::sea_orm_entity::{admin_roles, awards, events, gallery, grants, patents, publications};
use crate::portfolio::application::{
    domain::{
        entities::{
            AdminRole, AdminRoleDraft, AdminRolePatch, Award, AwardDraft, AwardPatch, Event,
            EventDraft, EventPatch, GalleryImage, GalleryImageDraft, GalleryImagePatch, Grant,
            GrantDraft, GrantPatch, Patent, PatentDraft, PatentPatch, Publication,
            PublicationDraft, PublicationPatch,
        },
        patch_field::PatchField,
        record::PortfolioRecord,
    },
    ports::outgoing::RecordRepositoryError,
};

type ModelOf<T> = <<T as SeaOrmTable>::Entity as EntityTrait>::Model;
type ColumnOf<T> = <<T as SeaOrmTable>::Entity as EntityTrait>::Column;
type DraftOf<T> = <<T as SeaOrmTable>::Record as PortfolioRecord>::Draft;
type PatchOf<T> = <<T as SeaOrmTable>::Record as PortfolioRecord>::Patch;

/// Binds one record type to its table.
pub trait SeaOrmTable: Sized + Send + Sync + 'static {
    type Record: PortfolioRecord;
    type Entity: EntityTrait;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send + Sync;

    fn id_column() -> ColumnOf<Self>;

    /// Column matching `Record::KIND.ordering`; listed descending.
    fn order_column() -> ColumnOf<Self>;

    fn to_record(model: ModelOf<Self>) -> Result<Self::Record, RecordRepositoryError>;

    fn insert_model(id: Uuid, draft: DraftOf<Self>) -> Self::ActiveModel;

    fn patch_model(patch: PatchOf<Self>) -> Self::ActiveModel;
}

// ──────────────────────────────────────────────────────────
// PatchField → ActiveValue
// ──────────────────────────────────────────────────────────

fn set_required<V>(field: PatchField<V>) -> ActiveValue<V>
where
    V: Into<Value>,
{
    match field {
        PatchField::Value(v) => Set(v),
        PatchField::Unset | PatchField::Null => NotSet,
    }
}

fn set_optional<V>(field: PatchField<V>) -> ActiveValue<Option<V>>
where
    Option<V>: Into<Value>,
{
    match field {
        PatchField::Unset => NotSet,
        PatchField::Null => Set(None),
        PatchField::Value(v) => Set(Some(v)),
    }
}

fn set_label<V, F>(field: PatchField<V>, as_str: F) -> ActiveValue<String>
where
    F: Fn(&V) -> &'static str,
{
    match field {
        PatchField::Value(v) => Set(as_str(&v).to_string()),
        PatchField::Unset | PatchField::Null => NotSet,
    }
}

fn parse_label<V>(column: &str, raw: &str) -> Result<V, RecordRepositoryError>
where
    V: std::str::FromStr,
    V::Err: std::fmt::Display,
{
    raw.parse::<V>().map_err(|e| {
        RecordRepositoryError::SerializationError(format!("{}: {}", column, e))
    })
}

// ──────────────────────────────────────────────────────────
// grants
// ──────────────────────────────────────────────────────────

pub struct GrantsTable;

impl SeaOrmTable for GrantsTable {
    type Record = Grant;
    type Entity = grants::Entity;
    type ActiveModel = grants::ActiveModel;

    fn id_column() -> grants::Column {
        grants::Column::Id
    }

    fn order_column() -> grants::Column {
        grants::Column::CreatedAt
    }

    fn to_record(model: grants::Model) -> Result<Grant, RecordRepositoryError> {
        Ok(Grant {
            id: model.id,
            title: model.title,
            funding_agency: model.funding_agency,
            amount: model.amount,
            period: model.period,
            status: parse_label("status", &model.status)?,
            description: model.description,
        })
    }

    fn insert_model(id: Uuid, draft: GrantDraft) -> grants::ActiveModel {
        grants::ActiveModel {
            id: Set(id),
            title: Set(draft.title),
            funding_agency: Set(draft.funding_agency),
            amount: Set(draft.amount),
            period: Set(draft.period),
            status: Set(draft.status.as_str().to_string()),
            description: Set(draft.description),
            created_at: NotSet,
        }
    }

    fn patch_model(patch: GrantPatch) -> grants::ActiveModel {
        grants::ActiveModel {
            id: NotSet,
            title: set_required(patch.title),
            funding_agency: set_required(patch.funding_agency),
            amount: set_optional(patch.amount),
            period: set_required(patch.period),
            status: set_label(patch.status, |s| s.as_str()),
            description: set_optional(patch.description),
            created_at: NotSet,
        }
    }
}

// ──────────────────────────────────────────────────────────
// publications
// ──────────────────────────────────────────────────────────

pub struct PublicationsTable;

impl SeaOrmTable for PublicationsTable {
    type Record = Publication;
    type Entity = publications::Entity;
    type ActiveModel = publications::ActiveModel;

    fn id_column() -> publications::Column {
        publications::Column::Id
    }

    fn order_column() -> publications::Column {
        publications::Column::Year
    }

    fn to_record(model: publications::Model) -> Result<Publication, RecordRepositoryError> {
        Ok(Publication {
            id: model.id,
            title: model.title,
            authors: model.authors,
            journal: model.journal,
            year: model.year,
            doi: model.doi,
            link: model.link,
        })
    }

    fn insert_model(id: Uuid, draft: PublicationDraft) -> publications::ActiveModel {
        publications::ActiveModel {
            id: Set(id),
            title: Set(draft.title),
            authors: Set(draft.authors),
            journal: Set(draft.journal),
            year: Set(draft.year),
            doi: Set(draft.doi),
            link: Set(draft.link),
            created_at: NotSet,
        }
    }

    fn patch_model(patch: PublicationPatch) -> publications::ActiveModel {
        publications::ActiveModel {
            id: NotSet,
            title: set_required(patch.title),
            authors: set_required(patch.authors),
            journal: set_required(patch.journal),
            year: set_required(patch.year),
            doi: set_optional(patch.doi),
            link: set_optional(patch.link),
            created_at: NotSet,
        }
    }
}

// ──────────────────────────────────────────────────────────
// admin_roles
// ──────────────────────────────────────────────────────────

pub struct AdminRolesTable;

impl SeaOrmTable for AdminRolesTable {
    type Record = AdminRole;
    type Entity = admin_roles::Entity;
    type ActiveModel = admin_roles::ActiveModel;

    fn id_column() -> admin_roles::Column {
        admin_roles::Column::Id
    }

    fn order_column() -> admin_roles::Column {
        admin_roles::Column::CreatedAt
    }

    fn to_record(model: admin_roles::Model) -> Result<AdminRole, RecordRepositoryError> {
        Ok(AdminRole {
            id: model.id,
            title: model.title,
            organization: model.organization,
            period: model.period,
            description: model.description,
        })
    }

    fn insert_model(id: Uuid, draft: AdminRoleDraft) -> admin_roles::ActiveModel {
        admin_roles::ActiveModel {
            id: Set(id),
            title: Set(draft.title),
            organization: Set(draft.organization),
            period: Set(draft.period),
            description: Set(draft.description),
            created_at: NotSet,
        }
    }

    fn patch_model(patch: AdminRolePatch) -> admin_roles::ActiveModel {
        admin_roles::ActiveModel {
            id: NotSet,
            title: set_required(patch.title),
            organization: set_required(patch.organization),
            period: set_required(patch.period),
            description: set_optional(patch.description),
            created_at: NotSet,
        }
    }
}

// ──────────────────────────────────────────────────────────
// patents
// ──────────────────────────────────────────────────────────

pub struct PatentsTable;

impl SeaOrmTable for PatentsTable {
    type Record = Patent;
    type Entity = patents::Entity;
    type ActiveModel = patents::ActiveModel;

    fn id_column() -> patents::Column {
        patents::Column::Id
    }

    fn order_column() -> patents::Column {
        patents::Column::Year
    }

    fn to_record(model: patents::Model) -> Result<Patent, RecordRepositoryError> {
        Ok(Patent {
            id: model.id,
            title: model.title,
            patent_number: model.patent_number,
            area: model.area,
            status: parse_label("status", &model.status)?,
            year: model.year,
        })
    }

    fn insert_model(id: Uuid, draft: PatentDraft) -> patents::ActiveModel {
        patents::ActiveModel {
            id: Set(id),
            title: Set(draft.title),
            patent_number: Set(draft.patent_number),
            area: Set(draft.area),
            status: Set(draft.status.as_str().to_string()),
            year: Set(draft.year),
            created_at: NotSet,
        }
    }

    fn patch_model(patch: PatentPatch) -> patents::ActiveModel {
        patents::ActiveModel {
            id: NotSet,
            title: set_required(patch.title),
            patent_number: set_optional(patch.patent_number),
            area: set_required(patch.area),
            status: set_label(patch.status, |s| s.as_str()),
            year: set_optional(patch.year),
            created_at: NotSet,
        }
    }
}

// ──────────────────────────────────────────────────────────
// awards
// ──────────────────────────────────────────────────────────

pub struct AwardsTable;

impl SeaOrmTable for AwardsTable {
    type Record = Award;
    type Entity = awards::Entity;
    type ActiveModel = awards::ActiveModel;

    fn id_column() -> awards::Column {
        awards::Column::Id
    }

    fn order_column() -> awards::Column {
        awards::Column::Year
    }

    fn to_record(model: awards::Model) -> Result<Award, RecordRepositoryError> {
        Ok(Award {
            id: model.id,
            title: model.title,
            organization: model.organization,
            year: model.year,
            description: model.description,
        })
    }

    fn insert_model(id: Uuid, draft: AwardDraft) -> awards::ActiveModel {
        awards::ActiveModel {
            id: Set(id),
            title: Set(draft.title),
            organization: Set(draft.organization),
            year: Set(draft.year),
            description: Set(draft.description),
            created_at: NotSet,
        }
    }

    fn patch_model(patch: AwardPatch) -> awards::ActiveModel {
        awards::ActiveModel {
            id: NotSet,
            title: set_required(patch.title),
            organization: set_required(patch.organization),
            year: set_required(patch.year),
            description: set_optional(patch.description),
            created_at: NotSet,
        }
    }
}

// ──────────────────────────────────────────────────────────
// events
// ──────────────────────────────────────────────────────────

pub struct EventsTable;

impl SeaOrmTable for EventsTable {
    type Record = Event;
    type Entity = events::Entity;
    type ActiveModel = events::ActiveModel;

    fn id_column() -> events::Column {
        events::Column::Id
    }

    fn order_column() -> events::Column {
        events::Column::Date
    }

    fn to_record(model: events::Model) -> Result<Event, RecordRepositoryError> {
        Ok(Event {
            id: model.id,
            title: model.title,
            kind: parse_label("type", &model.event_type)?,
            date: model.date,
            location: model.location,
            description: model.description,
        })
    }

    fn insert_model(id: Uuid, draft: EventDraft) -> events::ActiveModel {
        events::ActiveModel {
            id: Set(id),
            title: Set(draft.title),
            event_type: Set(draft.kind.as_str().to_string()),
            date: Set(draft.date),
            location: Set(draft.location),
            description: Set(draft.description),
            created_at: NotSet,
        }
    }

    fn patch_model(patch: EventPatch) -> events::ActiveModel {
        events::ActiveModel {
            id: NotSet,
            title: set_required(patch.title),
            event_type: set_label(patch.kind, |k| k.as_str()),
            date: set_required(patch.date),
            location: set_optional(patch.location),
            description: set_optional(patch.description),
            created_at: NotSet,
        }
    }
}

// ──────────────────────────────────────────────────────────
// gallery
// ──────────────────────────────────────────────────────────

pub struct GalleryTable;

impl SeaOrmTable for GalleryTable {
    type Record = GalleryImage;
    type Entity = gallery::Entity;
    type ActiveModel = gallery::ActiveModel;

    fn id_column() -> gallery::Column {
        gallery::Column::Id
    }

    fn order_column() -> gallery::Column {
        gallery::Column::CreatedAt
    }

    fn to_record(model: gallery::Model) -> Result<GalleryImage, RecordRepositoryError> {
        Ok(GalleryImage {
            id: model.id,
            url: model.url,
            caption: model.caption,
            category: model.category,
        })
    }

    fn insert_model(id: Uuid, draft: GalleryImageDraft) -> gallery::ActiveModel {
        gallery::ActiveModel {
            id: Set(id),
            url: Set(draft.url),
            caption: Set(draft.caption),
            category: Set(draft.category),
            created_at: NotSet,
        }
    }

    fn patch_model(patch: GalleryImagePatch) -> gallery::ActiveModel {
        gallery::ActiveModel {
            id: NotSet,
            url: NotSet,
            caption: set_optional(patch.caption),
            category: set_optional(patch.category),
            created_at: NotSet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::application::domain::entities::{GrantStatus, PatentStatus};
    use chrono::Utc;

    #[test]
    fn grant_columns_map_to_application_names() {
        let model = grants::Model {
            id: Uuid::new_v4(),
            title: "Smart Grid Study".to_string(),
            funding_agency: "NSF".to_string(),
            amount: None,
            period: "2021-2023".to_string(),
            status: "ongoing".to_string(),
            description: None,
            created_at: Utc::now().fixed_offset(),
        };

        let grant = GrantsTable::to_record(model).unwrap();
        let json = serde_json::to_value(&grant).unwrap();

        assert_eq!(json["fundingAgency"], "NSF");
        assert!(json.get("funding_agency").is_none());
        assert_eq!(grant.status, GrantStatus::Ongoing);
    }

    #[test]
    fn unknown_status_is_a_decode_error() {
        let model = patents::Model {
            id: Uuid::new_v4(),
            title: "Inverter".to_string(),
            patent_number: None,
            area: "Power".to_string(),
            status: "pending".to_string(),
            year: None,
            created_at: Utc::now().fixed_offset(),
        };

        assert!(matches!(
            PatentsTable::to_record(model),
            Err(RecordRepositoryError::SerializationError(_))
        ));
    }

    #[test]
    fn patch_sets_only_present_columns() {
        let patch = PatentPatch {
            patent_number: PatchField::Value("IN-42".to_string()),
            year: PatchField::Null,
            ..Default::default()
        };

        let active = PatentsTable::patch_model(patch);

        assert_eq!(active.patent_number, Set(Some("IN-42".to_string())));
        assert_eq!(active.year, Set(None));
        assert!(active.title.is_not_set());
        assert!(active.status.is_not_set());
        assert!(active.id.is_not_set());
    }

    #[test]
    fn event_type_goes_to_the_type_column() {
        let active = EventsTable::insert_model(
            Uuid::nil(),
            EventDraft {
                title: "Symposium".to_string(),
                date: "2025-01-10".to_string(),
                ..Default::default()
            },
        );

        assert_eq!(active.event_type, Set("conference".to_string()));
        assert!(active.created_at.is_not_set());
    }

    #[test]
    fn patent_number_maps_between_column_and_record() {
        let active = PatentsTable::insert_model(
            Uuid::nil(),
            PatentDraft {
                title: "Fault Locator".to_string(),
                patent_number: Some("IN 202141000123".to_string()),
                area: "HVDC".to_string(),
                status: PatentStatus::Granted,
                year: Some(2021),
            },
        );
        assert_eq!(active.id, Set(Uuid::nil()));
        assert_eq!(active.patent_number, Set(Some("IN 202141000123".to_string())));
        assert_eq!(active.status, Set("granted".to_string()));
        assert_eq!(active.year, Set(Some(2021)));

        let model = patents::Model {
            id: Uuid::nil(),
            title: "Fault Locator".to_string(),
            patent_number: Some("IN 202141000123".to_string()),
            area: "HVDC".to_string(),
            status: "granted".to_string(),
            year: Some(2021),
            created_at: Utc::now().fixed_offset(),
        };
        let patent = PatentsTable::to_record(model).unwrap();
        assert_eq!(patent.status, PatentStatus::Granted);
        let json = serde_json::to_value(&patent).unwrap();
        assert_eq!(json["patentNumber"], "IN 202141000123");
        assert!(json.get("patent_number").is_none());

        let active = PatentsTable::patch_model(PatentPatch {
            status: PatchField::Value(PatentStatus::Filed),
            ..Default::default()
        });
        assert_eq!(active.status, Set("filed".to_string()));
        assert!(active.patent_number.is_not_set());
    }

    #[test]
    fn publication_columns_round_trip() {
        let draft = PublicationDraft {
            title: "Adaptive Protection".to_string(),
            authors: "R. Sen".to_string(),
            journal: "IEEE TSG".to_string(),
            year: 2022,
            doi: Some("10.1109/TSG.2022.1".to_string()),
            link: None,
        };
        let active = PublicationsTable::insert_model(Uuid::nil(), draft.clone());
        assert_eq!(active.journal, Set("IEEE TSG".to_string()));
        assert_eq!(active.doi, Set(Some("10.1109/TSG.2022.1".to_string())));
        assert_eq!(active.link, Set(None));

        let model = publications::Model {
            id: Uuid::nil(),
            title: draft.title.clone(),
            authors: draft.authors.clone(),
            journal: draft.journal.clone(),
            year: draft.year,
            doi: draft.doi.clone(),
            link: None,
            created_at: Utc::now().fixed_offset(),
        };
        let publication = PublicationsTable::to_record(model).unwrap();
        assert_eq!(publication.to_draft(), draft);

        let active = PublicationsTable::patch_model(PublicationPatch {
            year: PatchField::Value(2023),
            link: PatchField::Null,
            ..Default::default()
        });
        assert_eq!(active.year, Set(2023));
        assert_eq!(active.link, Set(None));
        assert!(active.doi.is_not_set());
        assert!(active.journal.is_not_set());
    }

    #[test]
    fn admin_role_columns_round_trip() {
        let draft = AdminRoleDraft {
            title: "Head of Department".to_string(),
            organization: "Electrical Engineering".to_string(),
            period: "2019 - 2022".to_string(),
            description: None,
        };
        let active = AdminRolesTable::insert_model(Uuid::nil(), draft.clone());
        assert_eq!(active.organization, Set("Electrical Engineering".to_string()));
        assert_eq!(active.description, Set(None));
        assert!(active.created_at.is_not_set());

        let model = admin_roles::Model {
            id: Uuid::nil(),
            title: draft.title.clone(),
            organization: draft.organization.clone(),
            period: draft.period.clone(),
            description: None,
            created_at: Utc::now().fixed_offset(),
        };
        assert_eq!(AdminRolesTable::to_record(model).unwrap().to_draft(), draft);

        let active = AdminRolesTable::patch_model(AdminRolePatch {
            description: PatchField::Value("Curriculum".to_string()),
            ..Default::default()
        });
        assert_eq!(active.description, Set(Some("Curriculum".to_string())));
        assert!(active.title.is_not_set());
        assert!(active.period.is_not_set());
    }

    #[test]
    fn award_columns_round_trip() {
        let draft = AwardDraft {
            title: "Best Paper".to_string(),
            organization: "IEEE PES".to_string(),
            year: 2020,
            description: Some("PSC 2020".to_string()),
        };
        let active = AwardsTable::insert_model(Uuid::nil(), draft.clone());
        assert_eq!(active.year, Set(2020));
        assert_eq!(active.description, Set(Some("PSC 2020".to_string())));

        let model = awards::Model {
            id: Uuid::nil(),
            title: draft.title.clone(),
            organization: draft.organization.clone(),
            year: draft.year,
            description: draft.description.clone(),
            created_at: Utc::now().fixed_offset(),
        };
        assert_eq!(AwardsTable::to_record(model).unwrap().to_draft(), draft);

        let active = AwardsTable::patch_model(AwardPatch {
            description: PatchField::Null,
            ..Default::default()
        });
        assert_eq!(active.description, Set(None));
        assert!(active.year.is_not_set());
    }

    #[test]
    fn gallery_patch_never_touches_the_url_column() {
        let active = GalleryTable::insert_model(
            Uuid::nil(),
            GalleryImageDraft {
                url: "https://blobs.test/gallery/1_a.png".to_string(),
                caption: Some("Lab".to_string()),
                category: None,
            },
        );
        assert_eq!(active.url, Set("https://blobs.test/gallery/1_a.png".to_string()));
        assert_eq!(active.category, Set(None));

        let model = gallery::Model {
            id: Uuid::nil(),
            url: "https://blobs.test/gallery/1_a.png".to_string(),
            caption: Some("Lab".to_string()),
            category: None,
            created_at: Utc::now().fixed_offset(),
        };
        let image = GalleryTable::to_record(model).unwrap();
        assert_eq!(image.caption.as_deref(), Some("Lab"));

        let active = GalleryTable::patch_model(GalleryImagePatch {
            url: PatchField::Value("https://blobs.test/gallery/2_b.png".to_string()),
            caption: PatchField::Value("Visit".to_string()),
            ..Default::default()
        });
        assert!(active.url.is_not_set());
        assert_eq!(active.caption, Set(Some("Visit".to_string())));
        assert!(active.category.is_not_set());
    }
}
