//! Commissioning Forms
//!
//! Interactive state for a heat pump commissioning session:
//! - [`SectionEditor`]: one section's in-progress values and submission
//! - [`RecordStore`]: the aggregate of saved sections and completion
//! - [`Navigator`]: which section (or the summary) is shown
//! - [`CommissioningSession`]: the single owner wiring the three together
//!
//! # Example
//!
//! ```rust
//! use commission_forms::CommissioningSession;
//! use commission_schema::{Destination, SectionId};
//!
//! let mut session = CommissioningSession::new();
//! session.set_field("modelNumber", "HP-2000");
//!
//! // Submitting an incomplete section keeps the user where they are.
//! assert!(session.submit().is_err());
//! assert_eq!(session.current(), Destination::Section(SectionId::Equipment));
//!
//! // Navigating away keeps the typed values as an unvalidated draft.
//! session.on_section_change(Destination::Summary);
//! assert!(session.record().is_present(SectionId::Equipment));
//! assert!(!session.record().is_completed(SectionId::Equipment));
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod editor;
pub mod navigation;
pub mod session;
pub mod store;

pub use editor::SectionEditor;
pub use navigation::{Navigator, Transition};
pub use session::CommissioningSession;
pub use store::{AggregateRecord, RecordStore, SectionData};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
