use std::fmt::Debug;

use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use super::patch_field::PatchField;

pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;

/// Field a collection is listed by, always descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOrdering {
    Year,
    Date,
    CreatedAt,
}

/// Static description of one collection and how each backend names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordKind {
    /// Human label used in log lines and alerts ("Error saving grant").
    pub label: &'static str,
    /// Path segment under `/api` and `/api/admin`.
    pub route: &'static str,
    pub relational_table: &'static str,
    pub document_collection: &'static str,
    pub ordering: ListOrdering,
}

/// Value a record is ordered by when the backend cannot order for us.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    Year(Option<i32>),
    Date(String),
    Created,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordValidationError {
    #[error("Field '{0}' cannot be empty")]
    EmptyField(&'static str),

    #[error("Field '{0}' cannot be null")]
    NullRequiredField(&'static str),

    #[error("Field '{0}' must be between 1900 and 2100, got {1}")]
    YearOutOfRange(&'static str, i32),

    #[error("Field '{0}' cannot be changed after creation")]
    ImmutableField(&'static str),
}

impl RecordValidationError {
    pub fn code(&self) -> &'static str {
        match self {
            RecordValidationError::EmptyField(_) => "EMPTY_FIELD",
            RecordValidationError::NullRequiredField(_) => "NULL_REQUIRED_FIELD",
            RecordValidationError::YearOutOfRange(_, _) => "YEAR_OUT_OF_RANGE",
            RecordValidationError::ImmutableField(_) => "IMMUTABLE_FIELD",
        }
    }
}

/// Record fields without the identifier: the payload of `add`.
pub trait RecordDraft:
    Clone + Debug + Default + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    fn validate(&self) -> Result<(), RecordValidationError>;
}

/// A partial update: only the fields that are not `Unset` are written.
pub trait RecordPatch:
    Clone + Debug + Default + Serialize + DeserializeOwned + Send + Sync + 'static
{
    fn is_empty(&self) -> bool;

    fn validate(&self) -> Result<(), RecordValidationError>;
}

/// One of the seven listable portfolio collections.
pub trait PortfolioRecord:
    Clone + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    type Draft: RecordDraft;
    type Patch: RecordPatch;

    const KIND: RecordKind;

    fn id(&self) -> Uuid;

    fn from_draft(id: Uuid, draft: Self::Draft) -> Self;

    fn to_draft(&self) -> Self::Draft;

    /// Patch that overwrites every field with the draft's values.
    fn full_patch(draft: Self::Draft) -> Self::Patch;

    fn apply_patch(&mut self, patch: Self::Patch);

    fn sort_key(&self) -> SortKey;
}

// ──────────────────────────────────────────────────────────
// Validation helpers
// ──────────────────────────────────────────────────────────

pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), RecordValidationError> {
    if value.trim().is_empty() {
        return Err(RecordValidationError::EmptyField(field));
    }
    Ok(())
}

pub(crate) fn require_year(field: &'static str, year: i32) -> Result<(), RecordValidationError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(RecordValidationError::YearOutOfRange(field, year));
    }
    Ok(())
}

pub(crate) fn check_required_text(
    field: &'static str,
    patch: &PatchField<String>,
) -> Result<(), RecordValidationError> {
    match patch {
        PatchField::Unset => Ok(()),
        PatchField::Null => Err(RecordValidationError::NullRequiredField(field)),
        PatchField::Value(v) => require_text(field, v),
    }
}

pub(crate) fn check_required<T>(
    field: &'static str,
    patch: &PatchField<T>,
) -> Result<(), RecordValidationError> {
    if patch.is_null() {
        return Err(RecordValidationError::NullRequiredField(field));
    }
    Ok(())
}

/// Fields the server assigns may only be omitted from a patch.
pub(crate) fn check_immutable<T>(
    field: &'static str,
    patch: &PatchField<T>,
) -> Result<(), RecordValidationError> {
    if patch.is_unset() {
        return Ok(());
    }
    Err(RecordValidationError::ImmutableField(field))
}

pub(crate) fn check_required_year(
    field: &'static str,
    patch: &PatchField<i32>,
) -> Result<(), RecordValidationError> {
    match patch {
        PatchField::Unset => Ok(()),
        PatchField::Null => Err(RecordValidationError::NullRequiredField(field)),
        PatchField::Value(year) => require_year(field, *year),
    }
}

pub(crate) fn check_optional_year(
    field: &'static str,
    patch: &PatchField<i32>,
) -> Result<(), RecordValidationError> {
    match patch {
        PatchField::Value(year) => require_year(field, *year),
        _ => Ok(()),
    }
}
