//! Raw field values as entered by the user

use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// A single raw input value.
///
/// Text inputs, selects and text areas produce `Text`; checkboxes produce `Flag`.
/// Numbers in YAML or JSON documents deserialize as their decimal text, so
/// `heatingCapacity: 36000` reads the same as `heatingCapacity: "36000"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Checkbox state
    Flag(bool),
    /// Free-form text
    Text(String),
}

impl FieldValue {
    /// Text content, if this is a text value
    #[inline]
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::Flag(_) => None,
        }
    }

    /// Interpret as a boolean.
    ///
    /// Text is accepted when it spells a boolean (`true`/`false`, `yes`/`no`,
    /// `on`/`off`, `1`/`0`, any case).
    #[must_use]
    pub fn to_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(flag) => Some(*flag),
            FieldValue::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => Some(true),
                "false" | "no" | "off" | "0" => Some(false),
                _ => None,
            },
        }
    }

    /// Whether the user actually entered something
    #[inline]
    #[must_use]
    pub fn has_content(&self) -> bool {
        match self {
            FieldValue::Flag(flag) => *flag,
            FieldValue::Text(text) => !text.is_empty(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FieldValueVisitor)
    }
}

struct FieldValueVisitor;

impl Visitor<'_> for FieldValueVisitor {
    type Value = FieldValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("text, a number or a boolean")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<FieldValue, E> {
        Ok(FieldValue::Flag(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<FieldValue, E> {
        Ok(FieldValue::Text(value.to_string()))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<FieldValue, E> {
        Ok(FieldValue::Text(value.to_string()))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<FieldValue, E> {
        Ok(FieldValue::Text(value.to_string()))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<FieldValue, E> {
        Ok(FieldValue::Text(value.to_string()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<FieldValue, E> {
        Ok(FieldValue::Text(value))
    }
}

/// Named raw values for one section, in entry order.
///
/// A key that is absent differs from a key holding an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValues(IndexMap<String, FieldValue>);

impl FieldValues {
    /// Create an empty value set
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a value by field name
    #[inline]
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.0.get(field)
    }

    /// Set a value, replacing any previous one
    #[inline]
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.0.insert(field.into(), value.into());
    }

    /// Builder-style [`FieldValues::set`]
    #[inline]
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(field, value);
        self
    }

    /// Remove a value entirely
    #[inline]
    pub fn remove(&mut self, field: &str) -> Option<FieldValue> {
        self.0.shift_remove(field)
    }

    /// Iterate over `(name, value)` pairs in entry order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of keys present
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// No keys present
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// At least one non-empty text or a set flag
    #[must_use]
    pub fn has_content(&self) -> bool {
        self.0.values().any(FieldValue::has_content)
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for FieldValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_spelled_booleans_coerce() {
        assert_eq!(FieldValue::from("Yes").to_flag(), Some(true));
        assert_eq!(FieldValue::from("off").to_flag(), Some(false));
        assert_eq!(FieldValue::from("maybe").to_flag(), None);
        assert_eq!(FieldValue::from(true).to_flag(), Some(true));
    }

    #[test]
    fn defaults_have_no_content() {
        let values = FieldValues::new().with("modelNumber", "").with("csaCompliance", false);
        assert!(!values.has_content());
        assert!(values.clone().with("notes", "x").has_content());
        assert!(values.with("csaCompliance", true).has_content());
    }

    #[test]
    fn deserializes_mixed_values() {
        let values: FieldValues =
            serde_json::from_str(r#"{"controlSystemType":"smart","performanceMonitoring":true}"#)
                .unwrap();
        assert_eq!(values.get("controlSystemType"), Some(&FieldValue::from("smart")));
        assert_eq!(values.get("performanceMonitoring"), Some(&FieldValue::Flag(true)));
        let keys: Vec<&str> = values.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["controlSystemType", "performanceMonitoring"]);
    }

    #[test]
    fn numbers_read_as_their_text() {
        let values: FieldValues = serde_json::from_str(
            r#"{"heatingCapacity":36000,"lowAmbientLockout":-15,"externalStaticPressure":0.5,"performanceMonitoring":false}"#,
        )
        .unwrap();
        assert_eq!(values.get("heatingCapacity"), Some(&FieldValue::from("36000")));
        assert_eq!(values.get("lowAmbientLockout"), Some(&FieldValue::from("-15")));
        assert_eq!(values.get("externalStaticPressure"), Some(&FieldValue::from("0.5")));
        assert_eq!(values.get("performanceMonitoring"), Some(&FieldValue::Flag(false)));
    }

    #[test]
    fn nested_documents_are_rejected() {
        assert!(serde_json::from_str::<FieldValue>(r#"{"a":1}"#).is_err());
        assert!(serde_json::from_str::<FieldValue>("[1]").is_err());
        assert!(serde_json::from_str::<FieldValue>("null").is_err());
    }
}
