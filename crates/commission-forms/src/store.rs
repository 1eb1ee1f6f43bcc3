//! Aggregate Record Store
//!
//! The single owner of the session's saved section data. It performs no
//! validation: validated records arrive through [`RecordStore::save_validated`],
//! raw navigation drafts through [`RecordStore::save_draft`].

use std::collections::BTreeMap;

use commission_schema::{FieldValues, SectionId, SectionRecord};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Saved data for one section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "lowercase")]
pub enum SectionData {
    /// Passed the section validator on submission
    Validated(SectionRecord),
    /// Captured by navigating away; never validated
    Draft(FieldValues),
}

impl SectionData {
    #[inline]
    #[must_use]
    pub fn is_validated(&self) -> bool {
        matches!(self, SectionData::Validated(_))
    }

    /// Raw values an editor should be pre-populated with
    #[must_use]
    pub fn values(&self) -> FieldValues {
        match self {
            SectionData::Validated(record) => record.to_values(),
            SectionData::Draft(values) => values.clone(),
        }
    }

    /// Typed view for display; drafts are read leniently
    #[must_use]
    pub fn display_record(&self, section: SectionId) -> SectionRecord {
        match self {
            SectionData::Validated(record) => record.clone(),
            SectionData::Draft(values) => SectionRecord::from_values_lenient(section, values),
        }
    }
}

/// Snapshot of every section's latest saved data plus completion tracking.
///
/// A section is completed once it has been saved through
/// [`RecordStore::save_validated`]; later drafts never remove it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateRecord {
    #[serde(default)]
    sections: BTreeMap<SectionId, SectionData>,
    #[serde(default)]
    completed_sections: IndexSet<SectionId>,
}

impl AggregateRecord {
    /// Saved data for a section, `None` when absent
    #[inline]
    #[must_use]
    pub fn entry(&self, section: SectionId) -> Option<&SectionData> {
        self.sections.get(&section)
    }

    #[inline]
    #[must_use]
    pub fn is_present(&self, section: SectionId) -> bool {
        self.sections.contains_key(&section)
    }

    #[inline]
    #[must_use]
    pub fn is_completed(&self, section: SectionId) -> bool {
        self.completed_sections.contains(&section)
    }

    /// Completed sections in the order they were first completed
    pub fn completed_sections(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.completed_sections.iter().copied()
    }

    /// Every section holds some data, validated or not
    #[must_use]
    pub fn is_complete(&self) -> bool {
        SectionId::ALL.iter().all(|s| self.is_present(*s))
    }

    /// Sections with no data, in navigation order
    #[must_use]
    pub fn missing_sections(&self) -> Vec<SectionId> {
        SectionId::ALL
            .into_iter()
            .filter(|s| !self.is_present(*s))
            .collect()
    }

    /// No data and nothing completed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty() && self.completed_sections.is_empty()
    }
}

/// Owner of the session's [`AggregateRecord`]
#[derive(Debug, Default)]
pub struct RecordStore {
    record: AggregateRecord,
}

impl RecordStore {
    /// Empty store: all sections absent, nothing completed
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an exported snapshot
    #[inline]
    #[must_use]
    pub fn from_snapshot(record: AggregateRecord) -> Self {
        Self { record }
    }

    /// Current snapshot
    #[inline]
    #[must_use]
    pub fn get(&self) -> &AggregateRecord {
        &self.record
    }

    /// Upsert a validated record and mark its section completed
    pub fn save_validated(&mut self, record: SectionRecord) {
        let section = record.section();
        self.record
            .sections
            .insert(section, SectionData::Validated(record));
        let first_completion = self.record.completed_sections.insert(section);
        tracing::info!(%section, first_completion, "Saved validated section");
    }

    /// Upsert raw values without validation.
    ///
    /// Completion is left untouched.
    pub fn save_draft(&mut self, section: SectionId, values: FieldValues) {
        tracing::warn!(
            %section,
            fields = values.len(),
            "Saving unvalidated draft"
        );
        self.record
            .sections
            .insert(section, SectionData::Draft(values));
    }

    /// Reset to the empty record
    pub fn clear_all(&mut self) {
        self.record = AggregateRecord::default();
        tracing::info!("Cleared all section data");
    }
}
