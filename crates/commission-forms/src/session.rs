//! Commissioning session
//!
//! Owns the record store, the navigator and the editor of the active
//! section. Every user action (field input, submit, navigate, clear) goes
//! through this type and runs to completion before the next one.

use commission_schema::{Destination, FieldErrors, FieldValue, SectionId};

use crate::editor::SectionEditor;
use crate::navigation::{Navigator, Transition};
use crate::store::{AggregateRecord, RecordStore, SectionData};

#[derive(Debug)]
pub struct CommissioningSession {
    store: RecordStore,
    navigator: Navigator,
    editor: SectionEditor,
}

impl Default for CommissioningSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CommissioningSession {
    /// Empty record, editing the first section
    #[must_use]
    pub fn new() -> Self {
        Self::with_store(RecordStore::new())
    }

    /// Resume editing over an existing store
    #[must_use]
    pub fn with_store(store: RecordStore) -> Self {
        let navigator = Navigator::new();
        let editor = load_editor(store.get(), navigator.active_section());
        Self {
            store,
            navigator,
            editor,
        }
    }

    #[inline]
    #[must_use]
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Current snapshot of the aggregate record
    #[inline]
    #[must_use]
    pub fn record(&self) -> &AggregateRecord {
        self.store.get()
    }

    #[inline]
    #[must_use]
    pub fn current(&self) -> Destination {
        self.navigator.current()
    }

    /// Editor of the active section. While the summary is shown this is the
    /// editor of the section that was active before.
    #[inline]
    #[must_use]
    pub fn editor(&self) -> &SectionEditor {
        &self.editor
    }

    /// Forward one input event to the active editor.
    ///
    /// Returns `false` when the summary is shown and no editor is active.
    pub fn set_field(&mut self, field: &str, value: impl Into<FieldValue>) -> bool {
        if self.navigator.current().is_summary() {
            tracing::warn!(field, "No section is being edited; input dropped");
            return false;
        }
        self.editor.set(field, value);
        true
    }

    /// Submit the active editor.
    ///
    /// On success the record is saved as validated and the session moves to
    /// the section's next destination. While the summary is shown there is
    /// nothing to submit and the summary is returned unchanged.
    ///
    /// # Errors
    /// Returns the editor's field errors; nothing is saved and the session
    /// stays on the same section
    pub fn submit(&mut self) -> Result<Destination, FieldErrors> {
        if self.navigator.current().is_summary() {
            tracing::debug!("Submit ignored on summary");
            return Ok(Destination::Summary);
        }
        let store = &mut self.store;
        let next = self
            .editor
            .submit(|record| store.save_validated(record))
            .map_err(Clone::clone)?;
        self.on_section_change(next);
        Ok(next)
    }

    /// Navigate to any state.
    ///
    /// Leaving a section first stores the editor's in-progress values as an
    /// unvalidated draft (see [`CommissioningSession::save_active_draft`]).
    /// Returns `None` when `to` is already the current state.
    pub fn on_section_change(&mut self, to: Destination) -> Option<Transition> {
        if to == self.navigator.current() {
            return None;
        }
        self.save_active_draft();
        let transition = self.navigator.select(to)?;
        if let Destination::Section(section) = to {
            self.editor = load_editor(self.store.get(), section);
        }
        tracing::info!(from = %transition.from, to = %transition.to, "Section changed");
        Some(transition)
    }

    /// "View Summary" / "Back to Form"
    pub fn toggle_summary(&mut self) -> Transition {
        let to = match self.navigator.current() {
            Destination::Summary => Destination::Section(self.navigator.active_section()),
            Destination::Section(_) => Destination::Summary,
        };
        let from = self.navigator.current();
        self.on_section_change(to).unwrap_or(Transition { from, to })
    }

    /// Store the active editor's values without validation.
    ///
    /// Only happens while a section is shown and the editor holds edits with
    /// some content; untouched editors mirror what is already stored.
    /// Returns whether a draft was written.
    pub fn save_active_draft(&mut self) -> bool {
        let Destination::Section(section) = self.navigator.current() else {
            return false;
        };
        if !self.editor.is_dirty() || !self.editor.values().has_content() {
            return false;
        }
        self.store.save_draft(section, self.editor.values().clone());
        self.editor.mark_clean();
        true
    }

    /// Reset the record; the session stays on the current state with a
    /// fresh editor.
    pub fn clear_all(&mut self) {
        self.store.clear_all();
        self.editor = SectionEditor::new(self.editor.section());
    }
}

fn load_editor(record: &AggregateRecord, section: SectionId) -> SectionEditor {
    match record.entry(section) {
        Some(SectionData::Validated(saved)) => SectionEditor::with_record(saved),
        Some(SectionData::Draft(values)) => SectionEditor::with_values(section, values.clone()),
        None => SectionEditor::new(section),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigating_untouched_editor_saves_nothing() {
        let mut session = CommissioningSession::new();
        session.on_section_change(Destination::Section(SectionId::Control));
        session.on_section_change(Destination::Summary);
        assert!(session.record().is_empty());
    }

    #[test]
    fn summary_drops_input() {
        let mut session = CommissioningSession::new();
        session.toggle_summary();
        assert!(!session.set_field("modelNumber", "x"));
        assert_eq!(session.submit().unwrap(), Destination::Summary);
    }

    #[test]
    fn draft_reloads_when_returning() {
        let mut session = CommissioningSession::new();
        session.set_field("modelNumber", "HP-9");
        session.on_section_change(Destination::Section(SectionId::Safety));
        session.on_section_change(Destination::Section(SectionId::Equipment));

        assert_eq!(session.editor().value("modelNumber"), Some(&FieldValue::from("HP-9")));
        assert!(!session.editor().is_dirty());
        assert_eq!(
            session.record().entry(SectionId::Equipment),
            Some(&SectionData::Draft(session.editor().values().clone()))
        );
    }

    #[test]
    fn clear_all_keeps_position() {
        let mut session = CommissioningSession::new();
        session.on_section_change(Destination::Section(SectionId::Installation));
        session.set_field("airflowMeasurement", "1200");
        session.clear_all();

        assert_eq!(session.current(), Destination::Section(SectionId::Installation));
        assert_eq!(session.editor().values(), &SectionId::Installation.default_values());
        assert!(session.record().is_empty());
    }
}
