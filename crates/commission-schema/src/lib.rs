//! Commissioning Field Schemas
//!
//! Declarative field tables and plain validators for the five sections of a
//! heat pump commissioning record.
//!
//! # Core Concepts
//!
//! - [`SectionId`]: Equipment, Installation, Control, Safety, Performance
//! - [`Destination`]: a section or the summary view
//! - [`FieldValues`]: raw, unvalidated values as entered
//! - [`FieldSpec`]: one declared field (label, requirement, hint, unit, options)
//! - [`SectionRecord`]: a validated, typed record
//! - [`FieldErrors`]: per-field validation failures
//!
//! # Example
//!
//! ```rust
//! use commission_schema::{validate_section, FieldValues, SectionId};
//!
//! let values = FieldValues::new().with("modelNumber", "HP-2000");
//! let errors = validate_section(SectionId::Equipment, &values).unwrap_err();
//! assert!(errors.contains("serialNumber"));
//! assert!(!errors.contains("modelNumber"));
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod error;
mod records;
mod section;
mod validate;
mod value;

pub mod field;

pub use error::{FieldErrors, FieldValidationError};
pub use field::{field_enabled, FieldKind, FieldOption, FieldSpec, Requirement};
pub use records::{
    ControlRecord, EquipmentRecord, InstallationRecord, PerformanceRecord, SafetyRecord,
    SectionRecord,
};
pub use section::{Destination, ParseSectionError, SectionId};
pub use validate::{
    validate_control, validate_equipment, validate_installation, validate_performance,
    validate_safety, validate_section,
};
pub use value::{FieldValue, FieldValues};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
