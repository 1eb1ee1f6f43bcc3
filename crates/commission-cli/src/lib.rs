//! Commissioning CLI
//!
//! Library half of the `commission` binary: configuration, logging setup,
//! session scripts and the subcommands, kept here so they can be tested
//! without spawning a process.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod script;

pub use cli::build_cli;
pub use commands::{
    list_fields, render_snapshot, run_script, validate_values, FileSink, ReportSettings, Status,
};
pub use config::{Config, LoggingConfig, ReportConfig};
pub use script::{read_document, Script, Step, StepOutcome};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
