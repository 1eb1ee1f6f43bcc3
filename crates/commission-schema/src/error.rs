//! Field validation errors
//!
//! The only error kind the form core produces. Errors stay with the editor
//! that produced them and are shown next to the offending field.

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// A single field failed its schema constraint
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct FieldValidationError {
    /// Wire name of the offending field
    pub field: String,
    /// Human-readable message
    pub message: String,
}

impl FieldValidationError {
    #[inline]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Field name to error mapping, in field declaration order.
///
/// At most one error is kept per field; the first one recorded wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct FieldErrors {
    errors: IndexMap<String, FieldValidationError>,
}

impl FieldErrors {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error unless the field already has one
    pub fn push(&mut self, error: FieldValidationError) {
        self.errors.entry(error.field.clone()).or_insert(error);
    }

    /// Message for a field, if it failed
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(|e| e.message.as_str())
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Names of failing fields
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldValidationError> {
        self.errors.values()
    }

    /// Drop all errors
    #[inline]
    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

impl FromIterator<FieldValidationError> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = FieldValidationError>>(iter: I) -> Self {
        let mut errors = Self::new();
        for error in iter {
            errors.push(error);
        }
        errors
    }
}

// Serialized as a flat `{ field: message }` object.
impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for error in self.errors.values() {
            map.serialize_entry(&error.field, &error.message)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_error_per_field_wins() {
        let errors: FieldErrors = [
            FieldValidationError::new("modelNumber", "Model number is required"),
            FieldValidationError::new("modelNumber", "second"),
            FieldValidationError::new("seerRating", "SEER rating is required"),
        ]
        .into_iter()
        .collect();

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("modelNumber"), Some("Model number is required"));
        assert_eq!(errors.to_string(), "2 field(s) failed validation");
    }

    #[test]
    fn serializes_as_flat_object() {
        let mut errors = FieldErrors::new();
        errors.push(FieldValidationError::new("installerName", "Installer name is required"));
        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"{"installerName":"Installer name is required"}"#);
    }
}
