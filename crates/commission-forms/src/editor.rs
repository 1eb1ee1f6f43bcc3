//! Section Editor
//!
//! Holds one section's in-progress values and the errors from the last
//! submission attempt. A successful submission is the only way validated
//! data leaves the editor.

use commission_schema::{
    field_enabled, validate_section, Destination, FieldErrors, FieldValue, FieldValues, SectionId,
    SectionRecord,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionEditor {
    section: SectionId,
    values: FieldValues,
    errors: FieldErrors,
    dirty: bool,
}

impl SectionEditor {
    /// Fresh editor with the section's default values
    #[must_use]
    pub fn new(section: SectionId) -> Self {
        Self::with_values(section, FieldValues::new())
    }

    /// Pre-populated from a previously saved record
    #[must_use]
    pub fn with_record(record: &SectionRecord) -> Self {
        Self::with_values(record.section(), record.to_values())
    }

    /// Pre-populated from raw values, laid over the defaults
    #[must_use]
    pub fn with_values(section: SectionId, values: FieldValues) -> Self {
        let mut merged = section.default_values();
        for (field, value) in values.iter() {
            merged.set(field, value.clone());
        }
        Self {
            section,
            values: merged,
            errors: FieldErrors::new(),
            dirty: false,
        }
    }

    #[inline]
    #[must_use]
    pub fn section(&self) -> SectionId {
        self.section
    }

    #[inline]
    #[must_use]
    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    #[inline]
    #[must_use]
    pub fn value(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    /// Errors from the last submission attempt
    #[inline]
    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Values changed since loading or the last save
    #[inline]
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Whether the input for `field` should be enabled.
    ///
    /// Disabled fields still accept [`SectionEditor::set`].
    #[must_use]
    pub fn is_enabled(&self, field: &str) -> bool {
        field_enabled(self.section, field, &self.values)
    }

    /// Record one input event
    pub fn set(&mut self, field: &str, value: impl Into<FieldValue>) {
        if self.section.field(field).is_none() {
            tracing::warn!(section = %self.section, field, "Value set for undeclared field; validation will ignore it");
        }
        let value = value.into();
        tracing::debug!(section = %self.section, field, ?value, "Field updated");
        self.values.set(field, value);
        self.dirty = true;
    }

    /// Validate and, on success, hand the record to `on_save` exactly once.
    ///
    /// Errors are recomputed on every attempt.
    ///
    /// # Errors
    /// Returns the field errors when validation fails; `on_save` is not called
    pub fn submit<F>(&mut self, on_save: F) -> Result<Destination, &FieldErrors>
    where
        F: FnOnce(SectionRecord),
    {
        self.errors.clear();
        match validate_section(self.section, &self.values) {
            Ok(record) => {
                on_save(record);
                self.dirty = false;
                Ok(self.section.next())
            }
            Err(errors) => {
                tracing::debug!(section = %self.section, failed = errors.len(), "Submission rejected");
                self.errors = errors;
                Err(&self.errors)
            }
        }
    }

    /// Forget local changes after the values were stored elsewhere
    #[inline]
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_control(monitoring: bool) -> SectionEditor {
        let mut editor = SectionEditor::new(SectionId::Control);
        editor.set("controlSystemType", "smart");
        editor.set("lowAmbientLockout", "-15");
        editor.set("auxiliaryHeatLockout", "-10");
        editor.set("performanceMonitoring", monitoring);
        editor
    }

    #[test]
    fn fresh_editor_is_clean_and_rejects_submission() {
        let mut editor = SectionEditor::new(SectionId::Equipment);
        assert!(!editor.is_dirty());
        let mut saved = 0;
        let errors = editor.submit(|_| saved += 1).unwrap_err().clone();
        assert_eq!(errors.len(), 9);
        assert_eq!(saved, 0);
        assert_eq!(editor.errors(), &errors);
    }

    #[test]
    fn errors_are_recomputed_each_attempt() {
        let mut editor = filled_control(false);
        editor.set("controlSystemType", "");
        assert!(editor.submit(|_| {}).is_err());
        assert!(editor.errors().contains("controlSystemType"));

        editor.set("controlSystemType", "integrated");
        let next = editor.submit(|_| {}).unwrap();
        assert_eq!(next, Destination::Section(SectionId::Safety));
        assert!(editor.errors().is_empty());
        assert!(!editor.is_dirty());
    }

    #[test]
    fn monitoring_toggle_only_changes_presentation() {
        let mut editor = filled_control(false);
        assert!(!editor.is_enabled("temperatureDifferential"));
        editor.set("temperatureDifferential", "4");
        assert_eq!(editor.value("temperatureDifferential"), Some(&FieldValue::from("4")));

        let mut saved = None;
        editor.submit(|record| saved = Some(record)).unwrap();
        let Some(SectionRecord::Control(control)) = saved else {
            panic!("control record expected");
        };
        assert_eq!(control.temperature_differential.as_deref(), Some("4"));
    }

    #[test]
    fn prepopulates_over_defaults() {
        let editor = SectionEditor::with_values(
            SectionId::Installation,
            FieldValues::new().with("airflowMeasurement", "1100"),
        );
        assert_eq!(editor.value("airflowMeasurement"), Some(&FieldValue::from("1100")));
        assert_eq!(editor.value("ductLeakageUnit"), Some(&FieldValue::from("cfm")));
        assert!(!editor.is_dirty());
    }
}
