use std::str::FromStr;

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::patch_field::PatchField;
use super::record::{
    check_immutable, check_optional_year, check_required, check_required_text, check_required_year, require_text,
    require_year, ListOrdering, PortfolioRecord, RecordDraft, RecordKind, RecordPatch,
    RecordValidationError, SortKey,
};

fn current_year() -> i32 {
    chrono::Utc::now().year()
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

// ──────────────────────────────────────────────────────────
// Controlled vocabularies
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum GrantStatus {
    Completed,
    #[default]
    Ongoing,
}

impl GrantStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GrantStatus::Completed => "completed",
            GrantStatus::Ongoing => "ongoing",
        }
    }
}

impl FromStr for GrantStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "completed" => Ok(GrantStatus::Completed),
            "ongoing" => Ok(GrantStatus::Ongoing),
            other => Err(UnknownVariant {
                kind: "grant status",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PatentStatus {
    #[default]
    Filed,
    Granted,
}

impl PatentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatentStatus::Filed => "filed",
            PatentStatus::Granted => "granted",
        }
    }
}

impl FromStr for PatentStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "filed" => Ok(PatentStatus::Filed),
            "granted" => Ok(PatentStatus::Granted),
            other => Err(UnknownVariant {
                kind: "patent status",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    #[default]
    Conference,
    Workshop,
    Seminar,
    Other,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Conference => "conference",
            EventType::Workshop => "workshop",
            EventType::Seminar => "seminar",
            EventType::Other => "other",
        }
    }
}

impl FromStr for EventType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "conference" => Ok(EventType::Conference),
            "workshop" => Ok(EventType::Workshop),
            "seminar" => Ok(EventType::Seminar),
            "other" => Ok(EventType::Other),
            other => Err(UnknownVariant {
                kind: "event type",
                value: other.to_string(),
            }),
        }
    }
}

// ──────────────────────────────────────────────────────────
// Grant
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Grant {
    pub id: Uuid,
    pub title: String,
    pub funding_agency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    pub period: String,
    pub status: GrantStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GrantDraft {
    pub title: String,
    pub funding_agency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    pub period: String,
    #[serde(default)]
    pub status: GrantStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GrantPatch {
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub title: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub funding_agency: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub amount: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub period: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub status: PatchField<GrantStatus>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub description: PatchField<String>,
}

impl RecordDraft for GrantDraft {
    fn validate(&self) -> Result<(), RecordValidationError> {
        require_text("title", &self.title)?;
        require_text("fundingAgency", &self.funding_agency)?;
        require_text("period", &self.period)
    }
}

impl RecordPatch for GrantPatch {
    fn is_empty(&self) -> bool {
        self.title.is_unset()
            && self.funding_agency.is_unset()
            && self.amount.is_unset()
            && self.period.is_unset()
            && self.status.is_unset()
            && self.description.is_unset()
    }

    fn validate(&self) -> Result<(), RecordValidationError> {
        check_required_text("title", &self.title)?;
        check_required_text("fundingAgency", &self.funding_agency)?;
        check_required_text("period", &self.period)?;
        check_required("status", &self.status)
    }
}

impl PortfolioRecord for Grant {
    type Draft = GrantDraft;
    type Patch = GrantPatch;

    const KIND: RecordKind = RecordKind {
        label: "grant",
        route: "grants",
        relational_table: "grants",
        document_collection: "grants",
        ordering: ListOrdering::CreatedAt,
    };

    fn id(&self) -> Uuid {
        self.id
    }

    fn from_draft(id: Uuid, draft: GrantDraft) -> Self {
        Self {
            id,
            title: draft.title,
            funding_agency: draft.funding_agency,
            amount: draft.amount,
            period: draft.period,
            status: draft.status,
            description: draft.description,
        }
    }

    fn to_draft(&self) -> GrantDraft {
        GrantDraft {
            title: self.title.clone(),
            funding_agency: self.funding_agency.clone(),
            amount: self.amount.clone(),
            period: self.period.clone(),
            status: self.status,
            description: self.description.clone(),
        }
    }

    fn full_patch(draft: GrantDraft) -> GrantPatch {
        GrantPatch {
            title: PatchField::Value(draft.title),
            funding_agency: PatchField::Value(draft.funding_agency),
            amount: PatchField::from_optional(draft.amount),
            period: PatchField::Value(draft.period),
            status: PatchField::Value(draft.status),
            description: PatchField::from_optional(draft.description),
        }
    }

    fn apply_patch(&mut self, patch: GrantPatch) {
        patch.title.apply_required(&mut self.title);
        patch.funding_agency.apply_required(&mut self.funding_agency);
        patch.amount.apply_optional(&mut self.amount);
        patch.period.apply_required(&mut self.period);
        patch.status.apply_required(&mut self.status);
        patch.description.apply_optional(&mut self.description);
    }

    fn sort_key(&self) -> SortKey {
        SortKey::Created
    }
}

// ──────────────────────────────────────────────────────────
// Publication
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    pub id: Uuid,
    pub title: String,
    /// Free text, e.g. "A. Author, B. Author"
    pub authors: String,
    pub journal: String,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicationDraft {
    pub title: String,
    pub authors: String,
    pub journal: String,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Default for PublicationDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            authors: String::new(),
            journal: String::new(),
            year: current_year(),
            doi: None,
            link: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PublicationPatch {
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub title: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub authors: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub journal: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub year: PatchField<i32>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub doi: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub link: PatchField<String>,
}

impl RecordDraft for PublicationDraft {
    fn validate(&self) -> Result<(), RecordValidationError> {
        require_text("title", &self.title)?;
        require_text("authors", &self.authors)?;
        require_text("journal", &self.journal)?;
        require_year("year", self.year)
    }
}

impl RecordPatch for PublicationPatch {
    fn is_empty(&self) -> bool {
        self.title.is_unset()
            && self.authors.is_unset()
            && self.journal.is_unset()
            && self.year.is_unset()
            && self.doi.is_unset()
            && self.link.is_unset()
    }

    fn validate(&self) -> Result<(), RecordValidationError> {
        check_required_text("title", &self.title)?;
        check_required_text("authors", &self.authors)?;
        check_required_text("journal", &self.journal)?;
        check_required_year("year", &self.year)
    }
}

impl PortfolioRecord for Publication {
    type Draft = PublicationDraft;
    type Patch = PublicationPatch;

    const KIND: RecordKind = RecordKind {
        label: "publication",
        route: "publications",
        relational_table: "publications",
        document_collection: "publications",
        ordering: ListOrdering::Year,
    };

    fn id(&self) -> Uuid {
        self.id
    }

    fn from_draft(id: Uuid, draft: PublicationDraft) -> Self {
        Self {
            id,
            title: draft.title,
            authors: draft.authors,
            journal: draft.journal,
            year: draft.year,
            doi: draft.doi,
            link: draft.link,
        }
    }

    fn to_draft(&self) -> PublicationDraft {
        PublicationDraft {
            title: self.title.clone(),
            authors: self.authors.clone(),
            journal: self.journal.clone(),
            year: self.year,
            doi: self.doi.clone(),
            link: self.link.clone(),
        }
    }

    fn full_patch(draft: PublicationDraft) -> PublicationPatch {
        PublicationPatch {
            title: PatchField::Value(draft.title),
            authors: PatchField::Value(draft.authors),
            journal: PatchField::Value(draft.journal),
            year: PatchField::Value(draft.year),
            doi: PatchField::from_optional(draft.doi),
            link: PatchField::from_optional(draft.link),
        }
    }

    fn apply_patch(&mut self, patch: PublicationPatch) {
        patch.title.apply_required(&mut self.title);
        patch.authors.apply_required(&mut self.authors);
        patch.journal.apply_required(&mut self.journal);
        patch.year.apply_required(&mut self.year);
        patch.doi.apply_optional(&mut self.doi);
        patch.link.apply_optional(&mut self.link);
    }

    fn sort_key(&self) -> SortKey {
        SortKey::Year(Some(self.year))
    }
}

// ──────────────────────────────────────────────────────────
// AdminRole
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminRole {
    pub id: Uuid,
    pub title: String,
    pub organization: String,
    /// Free text, e.g. "2019 - Present"
    pub period: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminRoleDraft {
    pub title: String,
    pub organization: String,
    pub period: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminRolePatch {
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub title: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub organization: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub period: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub description: PatchField<String>,
}

impl RecordDraft for AdminRoleDraft {
    fn validate(&self) -> Result<(), RecordValidationError> {
        require_text("title", &self.title)?;
        require_text("organization", &self.organization)?;
        require_text("period", &self.period)
    }
}

impl RecordPatch for AdminRolePatch {
    fn is_empty(&self) -> bool {
        self.title.is_unset()
            && self.organization.is_unset()
            && self.period.is_unset()
            && self.description.is_unset()
    }

    fn validate(&self) -> Result<(), RecordValidationError> {
        check_required_text("title", &self.title)?;
        check_required_text("organization", &self.organization)?;
        check_required_text("period", &self.period)
    }
}

impl PortfolioRecord for AdminRole {
    type Draft = AdminRoleDraft;
    type Patch = AdminRolePatch;

    const KIND: RecordKind = RecordKind {
        label: "admin role",
        route: "admin-roles",
        relational_table: "admin_roles",
        document_collection: "adminRoles",
        ordering: ListOrdering::CreatedAt,
    };

    fn id(&self) -> Uuid {
        self.id
    }

    fn from_draft(id: Uuid, draft: AdminRoleDraft) -> Self {
        Self {
            id,
            title: draft.title,
            organization: draft.organization,
            period: draft.period,
            description: draft.description,
        }
    }

    fn to_draft(&self) -> AdminRoleDraft {
        AdminRoleDraft {
            title: self.title.clone(),
            organization: self.organization.clone(),
            period: self.period.clone(),
            description: self.description.clone(),
        }
    }

    fn full_patch(draft: AdminRoleDraft) -> AdminRolePatch {
        AdminRolePatch {
            title: PatchField::Value(draft.title),
            organization: PatchField::Value(draft.organization),
            period: PatchField::Value(draft.period),
            description: PatchField::from_optional(draft.description),
        }
    }

    fn apply_patch(&mut self, patch: AdminRolePatch) {
        patch.title.apply_required(&mut self.title);
        patch.organization.apply_required(&mut self.organization);
        patch.period.apply_required(&mut self.period);
        patch.description.apply_optional(&mut self.description);
    }

    fn sort_key(&self) -> SortKey {
        SortKey::Created
    }
}

// ──────────────────────────────────────────────────────────
// Patent
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Patent {
    pub id: Uuid,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patent_number: Option<String>,
    pub area: String,
    pub status: PatentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatentDraft {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patent_number: Option<String>,
    pub area: String,
    #[serde(default)]
    pub status: PatentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

impl Default for PatentDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            patent_number: None,
            area: String::new(),
            status: PatentStatus::Filed,
            year: Some(current_year()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PatentPatch {
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub title: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub patent_number: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub area: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub status: PatchField<PatentStatus>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub year: PatchField<i32>,
}

impl RecordDraft for PatentDraft {
    fn validate(&self) -> Result<(), RecordValidationError> {
        require_text("title", &self.title)?;
        require_text("area", &self.area)?;
        match self.year {
            Some(year) => require_year("year", year),
            None => Ok(()),
        }
    }
}

impl RecordPatch for PatentPatch {
    fn is_empty(&self) -> bool {
        self.title.is_unset()
            && self.patent_number.is_unset()
            && self.area.is_unset()
            && self.status.is_unset()
            && self.year.is_unset()
    }

    fn validate(&self) -> Result<(), RecordValidationError> {
        check_required_text("title", &self.title)?;
        check_required_text("area", &self.area)?;
        check_required("status", &self.status)?;
        check_optional_year("year", &self.year)
    }
}

impl PortfolioRecord for Patent {
    type Draft = PatentDraft;
    type Patch = PatentPatch;

    const KIND: RecordKind = RecordKind {
        label: "patent",
        route: "patents",
        relational_table: "patents",
        document_collection: "patents",
        ordering: ListOrdering::Year,
    };

    fn id(&self) -> Uuid {
        self.id
    }

    fn from_draft(id: Uuid, draft: PatentDraft) -> Self {
        Self {
            id,
            title: draft.title,
            patent_number: draft.patent_number,
            area: draft.area,
            status: draft.status,
            year: draft.year,
        }
    }

    fn to_draft(&self) -> PatentDraft {
        PatentDraft {
            title: self.title.clone(),
            patent_number: self.patent_number.clone(),
            area: self.area.clone(),
            status: self.status,
            year: self.year,
        }
    }

    fn full_patch(draft: PatentDraft) -> PatentPatch {
        PatentPatch {
            title: PatchField::Value(draft.title),
            patent_number: PatchField::from_optional(draft.patent_number),
            area: PatchField::Value(draft.area),
            status: PatchField::Value(draft.status),
            year: PatchField::from_optional(draft.year),
        }
    }

    fn apply_patch(&mut self, patch: PatentPatch) {
        patch.title.apply_required(&mut self.title);
        patch.patent_number.apply_optional(&mut self.patent_number);
        patch.area.apply_required(&mut self.area);
        patch.status.apply_required(&mut self.status);
        patch.year.apply_optional(&mut self.year);
    }

    fn sort_key(&self) -> SortKey {
        SortKey::Year(self.year)
    }
}

// ──────────────────────────────────────────────────────────
// Award
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Award {
    pub id: Uuid,
    pub title: String,
    pub organization: String,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AwardDraft {
    pub title: String,
    pub organization: String,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Default for AwardDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            organization: String::new(),
            year: current_year(),
            description: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AwardPatch {
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub title: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub organization: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub year: PatchField<i32>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub description: PatchField<String>,
}

impl RecordDraft for AwardDraft {
    fn validate(&self) -> Result<(), RecordValidationError> {
        require_text("title", &self.title)?;
        require_text("organization", &self.organization)?;
        require_year("year", self.year)
    }
}

impl RecordPatch for AwardPatch {
    fn is_empty(&self) -> bool {
        self.title.is_unset()
            && self.organization.is_unset()
            && self.year.is_unset()
            && self.description.is_unset()
    }

    fn validate(&self) -> Result<(), RecordValidationError> {
        check_required_text("title", &self.title)?;
        check_required_text("organization", &self.organization)?;
        check_required_year("year", &self.year)
    }
}

impl PortfolioRecord for Award {
    type Draft = AwardDraft;
    type Patch = AwardPatch;

    const KIND: RecordKind = RecordKind {
        label: "award",
        route: "awards",
        relational_table: "awards",
        document_collection: "awards",
        ordering: ListOrdering::Year,
    };

    fn id(&self) -> Uuid {
        self.id
    }

    fn from_draft(id: Uuid, draft: AwardDraft) -> Self {
        Self {
            id,
            title: draft.title,
            organization: draft.organization,
            year: draft.year,
            description: draft.description,
        }
    }

    fn to_draft(&self) -> AwardDraft {
        AwardDraft {
            title: self.title.clone(),
            organization: self.organization.clone(),
            year: self.year,
            description: self.description.clone(),
        }
    }

    fn full_patch(draft: AwardDraft) -> AwardPatch {
        AwardPatch {
            title: PatchField::Value(draft.title),
            organization: PatchField::Value(draft.organization),
            year: PatchField::Value(draft.year),
            description: PatchField::from_optional(draft.description),
        }
    }

    fn apply_patch(&mut self, patch: AwardPatch) {
        patch.title.apply_required(&mut self.title);
        patch.organization.apply_required(&mut self.organization);
        patch.year.apply_required(&mut self.year);
        patch.description.apply_optional(&mut self.description);
    }

    fn sort_key(&self) -> SortKey {
        SortKey::Year(Some(self.year))
    }
}

// ──────────────────────────────────────────────────────────
// Event
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: EventType,
    /// Free text; ordering is lexical, so ISO dates sort correctly.
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: EventType,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventPatch {
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub title: PatchField<String>,
    #[serde(rename = "type", skip_serializing_if = "PatchField::is_unset")]
    pub kind: PatchField<EventType>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub date: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub location: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub description: PatchField<String>,
}

impl RecordDraft for EventDraft {
    fn validate(&self) -> Result<(), RecordValidationError> {
        require_text("title", &self.title)?;
        require_text("date", &self.date)
    }
}

impl RecordPatch for EventPatch {
    fn is_empty(&self) -> bool {
        self.title.is_unset()
            && self.kind.is_unset()
            && self.date.is_unset()
            && self.location.is_unset()
            && self.description.is_unset()
    }

    fn validate(&self) -> Result<(), RecordValidationError> {
        check_required_text("title", &self.title)?;
        check_required("type", &self.kind)?;
        check_required_text("date", &self.date)
    }
}

impl PortfolioRecord for Event {
    type Draft = EventDraft;
    type Patch = EventPatch;

    const KIND: RecordKind = RecordKind {
        label: "event",
        route: "events",
        relational_table: "events",
        document_collection: "events",
        ordering: ListOrdering::Date,
    };

    fn id(&self) -> Uuid {
        self.id
    }

    fn from_draft(id: Uuid, draft: EventDraft) -> Self {
        Self {
            id,
            title: draft.title,
            kind: draft.kind,
            date: draft.date,
            location: draft.location,
            description: draft.description,
        }
    }

    fn to_draft(&self) -> EventDraft {
        EventDraft {
            title: self.title.clone(),
            kind: self.kind,
            date: self.date.clone(),
            location: self.location.clone(),
            description: self.description.clone(),
        }
    }

    fn full_patch(draft: EventDraft) -> EventPatch {
        EventPatch {
            title: PatchField::Value(draft.title),
            kind: PatchField::Value(draft.kind),
            date: PatchField::Value(draft.date),
            location: PatchField::from_optional(draft.location),
            description: PatchField::from_optional(draft.description),
        }
    }

    fn apply_patch(&mut self, patch: EventPatch) {
        patch.title.apply_required(&mut self.title);
        patch.kind.apply_required(&mut self.kind);
        patch.date.apply_required(&mut self.date);
        patch.location.apply_optional(&mut self.location);
        patch.description.apply_optional(&mut self.description);
    }

    fn sort_key(&self) -> SortKey {
        SortKey::Date(self.date.clone())
    }
}

// ──────────────────────────────────────────────────────────
// GalleryImage
// ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub id: Uuid,
    /// Public URL produced by the blob storage.
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImageDraft {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryImagePatch {
    /// Assigned by the upload; any value here fails validation.
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub url: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub caption: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub category: PatchField<String>,
}

impl RecordDraft for GalleryImageDraft {
    fn validate(&self) -> Result<(), RecordValidationError> {
        require_text("url", &self.url)
    }
}

impl RecordPatch for GalleryImagePatch {
    fn is_empty(&self) -> bool {
        self.url.is_unset() && self.caption.is_unset() && self.category.is_unset()
    }

    fn validate(&self) -> Result<(), RecordValidationError> {
        check_immutable("url", &self.url)
    }
}

impl PortfolioRecord for GalleryImage {
    type Draft = GalleryImageDraft;
    type Patch = GalleryImagePatch;

    const KIND: RecordKind = RecordKind {
        label: "gallery image",
        route: "gallery",
        relational_table: "gallery",
        document_collection: "gallery",
        ordering: ListOrdering::CreatedAt,
    };

    fn id(&self) -> Uuid {
        self.id
    }

    fn from_draft(id: Uuid, draft: GalleryImageDraft) -> Self {
        Self {
            id,
            url: draft.url,
            caption: draft.caption,
            category: draft.category,
        }
    }

    fn to_draft(&self) -> GalleryImageDraft {
        GalleryImageDraft {
            url: self.url.clone(),
            caption: self.caption.clone(),
            category: self.category.clone(),
        }
    }

    fn full_patch(draft: GalleryImageDraft) -> GalleryImagePatch {
        GalleryImagePatch {
            url: PatchField::Unset,
            caption: PatchField::from_optional(draft.caption),
            category: PatchField::from_optional(draft.category),
        }
    }

    fn apply_patch(&mut self, patch: GalleryImagePatch) {
        patch.caption.apply_optional(&mut self.caption);
        patch.category.apply_optional(&mut self.category);
    }

    fn sort_key(&self) -> SortKey {
        SortKey::Created
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn grant_serializes_with_application_field_names() {
        let grant = Grant::from_draft(
            Uuid::nil(),
            GrantDraft {
                title: "Smart Grid Study".into(),
                funding_agency: "DST".into(),
                amount: None,
                period: "2021-2023".into(),
                status: GrantStatus::Ongoing,
                description: None,
            },
        );

        let value = serde_json::to_value(&grant).unwrap();

        assert_eq!(value["fundingAgency"], "DST");
        assert_eq!(value["status"], "ongoing");
        assert!(value.get("funding_agency").is_none());
        assert!(value.get("amount").is_none());
    }

    #[test]
    fn event_type_uses_the_type_key() {
        let draft: EventDraft = serde_json::from_value(json!({
            "title": "RustConf",
            "type": "workshop",
            "date": "2024-09-10"
        }))
        .unwrap();

        assert_eq!(draft.kind, EventType::Workshop);
    }

    #[test]
    fn grant_patch_only_touches_supplied_fields() {
        let mut grant = Grant {
            id: Uuid::new_v4(),
            title: "Smart Grid Study".into(),
            funding_agency: "DST".into(),
            amount: Some("10 Lakh".into()),
            period: "2021-2023".into(),
            status: GrantStatus::Ongoing,
            description: Some("Pilot".into()),
        };
        let patch: GrantPatch =
            serde_json::from_value(json!({ "status": "completed", "description": null })).unwrap();

        grant.apply_patch(patch);

        assert_eq!(grant.status, GrantStatus::Completed);
        assert_eq!(grant.funding_agency, "DST");
        assert_eq!(grant.amount.as_deref(), Some("10 Lakh"));
        assert_eq!(grant.description, None);
    }

    #[test]
    fn empty_patch_is_detected() {
        assert!(GrantPatch::default().is_empty());
        assert!(!PatentPatch {
            year: PatchField::Null,
            ..Default::default()
        }
        .is_empty());
    }

    #[test]
    fn draft_validation_reports_first_missing_field() {
        let draft = PublicationDraft {
            title: "Paper".into(),
            authors: " ".into(),
            ..Default::default()
        };

        assert_eq!(
            draft.validate(),
            Err(RecordValidationError::EmptyField("authors"))
        );
    }

    #[test]
    fn patch_rejects_null_on_required_field() {
        let patch: AwardPatch = serde_json::from_value(json!({ "organization": null })).unwrap();
        assert_eq!(
            patch.validate(),
            Err(RecordValidationError::NullRequiredField("organization"))
        );
    }

    #[test]
    fn drafts_default_to_the_current_year() {
        assert_eq!(AwardDraft::default().year, current_year());
        assert_eq!(PatentDraft::default().year, Some(current_year()));
        assert_eq!(GrantDraft::default().status, GrantStatus::Ongoing);
        assert_eq!(EventDraft::default().kind, EventType::Conference);
    }

    #[test]
    fn full_patch_round_trips_through_apply() {
        let original = Patent {
            id: Uuid::new_v4(),
            title: "Solar inverter".into(),
            patent_number: Some("IN-123".into()),
            area: "Power electronics".into(),
            status: PatentStatus::Filed,
            year: Some(2020),
        };
        let mut edited = original.clone();
        let mut draft = original.to_draft();
        draft.patent_number = None;
        draft.status = PatentStatus::Granted;

        edited.apply_patch(Patent::full_patch(draft));

        assert_eq!(edited.patent_number, None);
        assert_eq!(edited.status, PatentStatus::Granted);
        assert_eq!(edited.id, original.id);
    }

    #[test]
    fn gallery_url_cannot_be_patched() {
        let patch: GalleryImagePatch =
            serde_json::from_value(json!({ "url": "https://elsewhere.example/b.png" })).unwrap();
        assert_eq!(
            patch.validate(),
            Err(RecordValidationError::ImmutableField("url"))
        );

        let mut image = GalleryImage {
            id: Uuid::new_v4(),
            url: "https://blobs.example/a.png".into(),
            caption: Some("Lab".into()),
            category: None,
        };
        let mut draft = image.to_draft();
        draft.url = "https://elsewhere.example/b.png".into();
        draft.caption = None;
        let patch = GalleryImage::full_patch(draft);
        assert!(patch.validate().is_ok());

        image.apply_patch(patch);
        assert_eq!(image.url, "https://blobs.example/a.png");
        assert_eq!(image.caption, None);
    }

    #[test]
    fn status_strings_parse_back() {
        assert_eq!("granted".parse::<PatentStatus>(), Ok(PatentStatus::Granted));
        assert!("pending".parse::<GrantStatus>().is_err());
        assert_eq!(
            EventType::Seminar.as_str().parse::<EventType>(),
            Ok(EventType::Seminar)
        );
    }
}
