use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::patch_field::PatchField;
use super::record::{check_required, check_required_text, RecordValidationError};

/// Key of the one and only profile row/document.
pub const PROFILE_ID: &str = "main";

/// The site owner's profile. Exactly one exists per deployment.
///
/// Deserialization tolerates partial documents: anything missing takes its
/// default, so a profile written field-by-field is always readable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileData {
    pub name: String,
    pub title: String,
    pub department: String,
    pub university: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub qualifications: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_of_experience: Option<i32>,
    pub specialization: Vec<String>,
    pub achievements: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub research_interests: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub college_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scholars_count: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub name: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub title: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub department: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub university: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub bio: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub qualifications: PatchField<Vec<String>>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub experience: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub years_of_experience: PatchField<i32>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub specialization: PatchField<Vec<String>>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub achievements: PatchField<Vec<String>>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub research_interests: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub email: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub phone: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub address: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub profile_image: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub linkedin_url: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub college_url: PatchField<String>,
    #[serde(skip_serializing_if = "PatchField::is_unset")]
    pub scholars_count: PatchField<i32>,
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_unset()
            && self.title.is_unset()
            && self.department.is_unset()
            && self.university.is_unset()
            && self.bio.is_unset()
            && self.qualifications.is_unset()
            && self.experience.is_unset()
            && self.years_of_experience.is_unset()
            && self.specialization.is_unset()
            && self.achievements.is_unset()
            && self.research_interests.is_unset()
            && self.email.is_unset()
            && self.phone.is_unset()
            && self.address.is_unset()
            && self.profile_image.is_unset()
            && self.linkedin_url.is_unset()
            && self.college_url.is_unset()
            && self.scholars_count.is_unset()
    }

    pub fn validate(&self) -> Result<(), RecordValidationError> {
        check_required_text("name", &self.name)?;
        check_required_text("title", &self.title)?;
        check_required_text("department", &self.department)?;
        check_required_text("university", &self.university)?;
        check_required("qualifications", &self.qualifications)?;
        check_required("specialization", &self.specialization)?;
        check_required("achievements", &self.achievements)
    }

    /// Overwrites every field with the given profile.
    pub fn replace_with(profile: ProfileData) -> Self {
        Self {
            name: PatchField::Value(profile.name),
            title: PatchField::Value(profile.title),
            department: PatchField::Value(profile.department),
            university: PatchField::Value(profile.university),
            bio: PatchField::from_optional(profile.bio),
            qualifications: PatchField::Value(profile.qualifications),
            experience: PatchField::from_optional(profile.experience),
            years_of_experience: PatchField::from_optional(profile.years_of_experience),
            specialization: PatchField::Value(profile.specialization),
            achievements: PatchField::Value(profile.achievements),
            research_interests: PatchField::from_optional(profile.research_interests),
            email: PatchField::from_optional(profile.email),
            phone: PatchField::from_optional(profile.phone),
            address: PatchField::from_optional(profile.address),
            profile_image: PatchField::from_optional(profile.profile_image),
            linkedin_url: PatchField::from_optional(profile.linkedin_url),
            college_url: PatchField::from_optional(profile.college_url),
            scholars_count: PatchField::from_optional(profile.scholars_count),
        }
    }
}

impl ProfileData {
    pub fn apply_patch(&mut self, patch: ProfilePatch) {
        patch.name.apply_required(&mut self.name);
        patch.title.apply_required(&mut self.title);
        patch.department.apply_required(&mut self.department);
        patch.university.apply_required(&mut self.university);
        patch.bio.apply_optional(&mut self.bio);
        patch.qualifications.apply_required(&mut self.qualifications);
        patch.experience.apply_optional(&mut self.experience);
        patch.years_of_experience.apply_optional(&mut self.years_of_experience);
        patch.specialization.apply_required(&mut self.specialization);
        patch.achievements.apply_required(&mut self.achievements);
        patch.research_interests.apply_optional(&mut self.research_interests);
        patch.email.apply_optional(&mut self.email);
        patch.phone.apply_optional(&mut self.phone);
        patch.address.apply_optional(&mut self.address);
        patch.profile_image.apply_optional(&mut self.profile_image);
        patch.linkedin_url.apply_optional(&mut self.linkedin_url);
        patch.college_url.apply_optional(&mut self.college_url);
        patch.scholars_count.apply_optional(&mut self.scholars_count);
    }
}
