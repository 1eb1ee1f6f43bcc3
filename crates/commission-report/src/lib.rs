//! Commissioning Report
//!
//! Turns an [`AggregateRecord`](commission_forms::AggregateRecord) into a
//! human-readable compliance summary and gates the final output on
//! completeness.
//!
//! # Core Concepts
//!
//! - **[`ReportView`]**: one block per section, in navigation order, with a
//!   placeholder for sections that have no data yet
//! - **[`ReportSink`]**: external receiver of the final report
//! - **[`produce_final`]**: only emits when all five sections are present
//!
//! # Example
//!
//! ```rust
//! use commission_forms::CommissioningSession;
//! use commission_report::{generate, render_text, BlockStatus};
//! use commission_schema::SectionId;
//!
//! let session = CommissioningSession::new();
//! let view = generate(session.record());
//!
//! assert!(!view.is_complete);
//! assert_eq!(view.block(SectionId::Equipment).unwrap().status, BlockStatus::NotProvided);
//! assert!(render_text(&view).contains("No equipment data provided yet."));
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod export;
pub mod generate;
pub mod render;
pub mod view;

pub use export::{produce_final, ExportError, ReportSink, SinkError, WriterSink};
pub use generate::{generate, placeholder};
pub use render::{render, render_json, render_text};
pub use view::{
    BlockStatus, ReportBlock, ReportFormat, ReportLine, ReportView, INCOMPLETE_WARNING,
    REPORT_TITLE,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
