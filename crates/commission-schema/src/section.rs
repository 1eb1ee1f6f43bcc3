//! Section identifiers and navigation destinations

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the five independently validated data-entry groupings.
///
/// Declaration order is the default forward-navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    /// Equipment specifications
    Equipment,
    /// Installation and commissioning measurements
    Installation,
    /// Control system configuration
    Control,
    /// Safety and compliance sign-off
    Safety,
    /// Performance metrics
    Performance,
}

impl SectionId {
    /// All sections in forward-navigation order
    pub const ALL: [SectionId; 5] = [
        SectionId::Equipment,
        SectionId::Installation,
        SectionId::Control,
        SectionId::Safety,
        SectionId::Performance,
    ];

    /// Wire identifier (`equipment`, `installation`, ...)
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SectionId::Equipment => "equipment",
            SectionId::Installation => "installation",
            SectionId::Control => "control",
            SectionId::Safety => "safety",
            SectionId::Performance => "performance",
        }
    }

    /// Human-readable section title
    #[inline]
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            SectionId::Equipment => "Equipment Specifications",
            SectionId::Installation => "Installation & Commissioning",
            SectionId::Control => "Control Systems",
            SectionId::Safety => "Safety & Compliance",
            SectionId::Performance => "Performance Metrics",
        }
    }

    /// Where a successful submission of this section leads
    #[inline]
    #[must_use]
    pub const fn next(self) -> Destination {
        match self {
            SectionId::Equipment => Destination::Section(SectionId::Installation),
            SectionId::Installation => Destination::Section(SectionId::Control),
            SectionId::Control => Destination::Section(SectionId::Safety),
            SectionId::Safety => Destination::Section(SectionId::Performance),
            SectionId::Performance => Destination::Summary,
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = ParseSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|section| section.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseSectionError(s.to_string()))
    }
}

/// A navigation state: one of the sections, or the summary view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Destination {
    /// Editing a section
    Section(SectionId),
    /// Viewing the summary report
    Summary,
}

impl Destination {
    /// All destinations in forward order, ending with the summary
    pub const ALL: [Destination; 6] = [
        Destination::Section(SectionId::Equipment),
        Destination::Section(SectionId::Installation),
        Destination::Section(SectionId::Control),
        Destination::Section(SectionId::Safety),
        Destination::Section(SectionId::Performance),
        Destination::Summary,
    ];

    /// Section being edited, if any
    #[inline]
    #[must_use]
    pub const fn section(self) -> Option<SectionId> {
        match self {
            Destination::Section(section) => Some(section),
            Destination::Summary => None,
        }
    }

    /// Whether this is the summary view
    #[inline]
    #[must_use]
    pub const fn is_summary(self) -> bool {
        matches!(self, Destination::Summary)
    }
}

impl From<SectionId> for Destination {
    fn from(section: SectionId) -> Self {
        Destination::Section(section)
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Section(section) => section.fmt(f),
            Destination::Summary => f.write_str("summary"),
        }
    }
}

impl FromStr for Destination {
    type Err = ParseSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("summary") {
            return Ok(Destination::Summary);
        }
        s.parse().map(Destination::Section)
    }
}

impl From<Destination> for String {
    fn from(dest: Destination) -> Self {
        dest.to_string()
    }
}

impl TryFrom<String> for Destination {
    type Error = ParseSectionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Unrecognized section or destination name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section '{0}' (expected equipment, installation, control, safety, performance or summary)")]
pub struct ParseSectionError(pub String);
