//! Report view model

use std::fmt;
use std::str::FromStr;

use commission_schema::SectionId;
use serde::{Deserialize, Serialize};

/// Title shown above the report
pub const REPORT_TITLE: &str = "Heat Pump System Summary";

/// Shown while any section is still absent
pub const INCOMPLETE_WARNING: &str = "Please complete all sections to generate a full report.";

/// Where a block's content came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockStatus {
    /// Validated submission
    Provided,
    /// Navigation draft, never validated
    Draft,
    /// Nothing saved
    NotProvided,
}

/// One `Label: value` line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLine {
    pub label: &'static str,
    pub value: String,
}

impl ReportLine {
    pub(crate) fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Formatted block for one section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportBlock {
    pub section: SectionId,
    pub title: &'static str,
    pub status: BlockStatus,
    /// Section has had a validated submission this session
    pub completed: bool,
    pub lines: Vec<ReportLine>,
    /// Text shown instead of lines when nothing was provided
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
}

impl ReportBlock {
    /// Value of the line with `label`, if rendered
    #[must_use]
    pub fn line(&self, label: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|line| line.label == label)
            .map(|line| line.value.as_str())
    }
}

/// Human-readable projection of an aggregate record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportView {
    pub title: &'static str,
    pub blocks: Vec<ReportBlock>,
    /// All five sections hold data; gates the final output
    pub is_complete: bool,
    pub missing: Vec<SectionId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<&'static str>,
}

impl ReportView {
    #[must_use]
    pub fn block(&self, section: SectionId) -> Option<&ReportBlock> {
        self.blocks.iter().find(|block| block.section == section)
    }
}

/// Output format for rendered reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => f.write_str("text"),
            ReportFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(format!("unknown report format '{other}' (expected text or json)")),
        }
    }
}
