//! Navigation Controller
//!
//! States are the five sections plus the summary view. Any state may be
//! selected directly; the linear order (see [`SectionId::next`]) is only
//! used by successful submissions.

use commission_schema::{Destination, SectionId};

/// A state change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Destination,
    pub to: Destination,
}

/// Tracks which section is being edited, or whether the summary is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    /// Last section edited; kept while the summary is shown
    active: SectionId,
    summary: bool,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            active: SectionId::Equipment,
            summary: false,
        }
    }
}

impl Navigator {
    /// Start on the first section
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current(&self) -> Destination {
        if self.summary {
            Destination::Summary
        } else {
            Destination::Section(self.active)
        }
    }

    /// Section last edited, also while the summary is shown
    #[inline]
    #[must_use]
    pub fn active_section(&self) -> SectionId {
        self.active
    }

    /// Jump to any state; `None` when already there
    pub fn select(&mut self, to: Destination) -> Option<Transition> {
        let from = self.current();
        if from == to {
            return None;
        }
        match to {
            Destination::Section(section) => {
                self.active = section;
                self.summary = false;
            }
            Destination::Summary => self.summary = true,
        }
        tracing::debug!(%from, %to, "Navigated");
        Some(Transition { from, to })
    }

    /// Follow the linear order from the active section
    pub fn advance(&mut self) -> Option<Transition> {
        if self.summary {
            return None;
        }
        self.select(self.active.next())
    }

    /// "View Summary" / "Back to Form"
    pub fn toggle_summary(&mut self) -> Transition {
        let to = if self.summary {
            Destination::Section(self.active)
        } else {
            Destination::Summary
        };
        let from = self.current();
        self.select(to).unwrap_or(Transition { from, to })
    }
}
