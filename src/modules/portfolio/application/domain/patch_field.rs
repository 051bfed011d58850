use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// Meaning:
// - Unset: field not provided => keep stored value
// - Null: explicitly null => clear the field (only for optional fields)
// - Value(v): replace with v
//
// Serde behavior:
// - omitted field => Unset (requires #[serde(default)] on the containing struct)
// - null => Null
// - value => Value(value)
//
// Containing structs must also mark each field with
// `skip_serializing_if = "PatchField::is_unset"` so only present keys are written.
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PatchField::Null)
    }

    pub fn is_value(&self) -> bool {
        matches!(self, PatchField::Value(_))
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }

    /// Full replacement of an optional field: `None` becomes an explicit clear.
    pub fn from_optional(value: Option<T>) -> Self {
        match value {
            Some(v) => PatchField::Value(v),
            None => PatchField::Null,
        }
    }

    /// Applies the patch to a required field. `Null` leaves the value alone;
    /// callers reject it during validation.
    pub fn apply_required(self, target: &mut T) {
        if let PatchField::Value(v) = self {
            *target = v;
        }
    }

    pub fn apply_optional(self, target: &mut Option<T>) {
        match self {
            PatchField::Unset => {}
            PatchField::Null => *target = None,
            PatchField::Value(v) => *target = Some(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    struct Probe {
        #[serde(default, skip_serializing_if = "PatchField::is_unset")]
        name: PatchField<String>,
        #[serde(default, skip_serializing_if = "PatchField::is_unset")]
        note: PatchField<String>,
    }

    #[test]
    fn omitted_key_is_unset_and_null_is_null() {
        let probe: Probe = serde_json::from_str(r#"{"note": null}"#).unwrap();

        assert!(probe.name.is_unset());
        assert!(probe.note.is_null());
    }

    #[test]
    fn value_is_captured() {
        let probe: Probe = serde_json::from_str(r#"{"name": "Ada"}"#).unwrap();
        assert_eq!(probe.name.as_value().map(String::as_str), Some("Ada"));
    }

    #[test]
    fn serializing_skips_unset_fields() {
        let probe = Probe {
            name: PatchField::Unset,
            note: PatchField::Null,
        };

        let json = serde_json::to_value(&probe).unwrap();
        assert_eq!(json, serde_json::json!({ "note": null }));
    }

    #[test]
    fn apply_optional_distinguishes_null_from_unset() {
        let mut target = Some("kept".to_string());

        PatchField::<String>::Unset.apply_optional(&mut target);
        assert_eq!(target.as_deref(), Some("kept"));

        PatchField::<String>::Null.apply_optional(&mut target);
        assert_eq!(target, None);
    }

    #[test]
    fn apply_required_ignores_null() {
        let mut target = "kept".to_string();
        PatchField::<String>::Null.apply_required(&mut target);
        assert_eq!(target, "kept");

        PatchField::Value("new".to_string()).apply_required(&mut target);
        assert_eq!(target, "new");
    }
}
