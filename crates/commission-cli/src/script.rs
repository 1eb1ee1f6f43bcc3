//! Session scripts
//!
//! A script is a list of user actions replayed against a fresh
//! [`CommissioningSession`]:
//!
//! ```yaml
//! steps:
//!   - action: fill
//!     values:
//!       modelNumber: HP-2000
//!       seerRating: "20"
//!   - action: set
//!     field: compressorType
//!     value: variable
//!   - action: submit
//!   - action: goto
//!     to: summary
//! ```

use std::path::Path;

use anyhow::Context;
use commission_forms::CommissioningSession;
use commission_schema::{Destination, FieldErrors, FieldValue, FieldValues, SectionId};
use serde::de::DeserializeOwned;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// One user action
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Step {
    /// Single input event
    Set { field: String, value: FieldValue },
    /// Several input events in order
    Fill { values: FieldValues },
    Submit,
    /// Jump to a section or the summary
    Goto { to: Destination },
    /// Toggle between the summary and the last section
    Summary,
    /// Clear all saved data
    Clear,
}

/// What happened on one step
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    Applied,
    /// Input dropped while the summary was shown
    Ignored,
    Submitted { next: Destination },
    Rejected { section: SectionId, errors: FieldErrors },
}

impl Script {
    /// Load a script, choosing JSON or YAML by file extension
    ///
    /// # Errors
    /// Unreadable or malformed file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        read_document(path)
    }

    /// Replay every step against `session`
    pub fn replay(&self, session: &mut CommissioningSession) -> Vec<StepOutcome> {
        self.steps
            .iter()
            .enumerate()
            .map(|(index, step)| {
                let outcome = step.apply(session);
                tracing::debug!(step = index + 1, ?outcome, "Script step applied");
                outcome
            })
            .collect()
    }
}

impl Step {
    pub fn apply(&self, session: &mut CommissioningSession) -> StepOutcome {
        match self {
            Step::Set { field, value } => {
                if session.set_field(field, value.clone()) {
                    StepOutcome::Applied
                } else {
                    StepOutcome::Ignored
                }
            }
            Step::Fill { values } => {
                let mut applied = true;
                for (field, value) in values.iter() {
                    applied &= session.set_field(field, value.clone());
                }
                if applied {
                    StepOutcome::Applied
                } else {
                    StepOutcome::Ignored
                }
            }
            Step::Submit => {
                let section = session.editor().section();
                match session.submit() {
                    Ok(next) => StepOutcome::Submitted { next },
                    Err(errors) => StepOutcome::Rejected { section, errors },
                }
            }
            Step::Goto { to } => {
                session.on_section_change(*to);
                StepOutcome::Applied
            }
            Step::Summary => {
                session.toggle_summary();
                StepOutcome::Applied
            }
            Step::Clear => {
                session.clear_all();
                StepOutcome::Applied
            }
        }
    }
}

/// Read a JSON (`.json`) or YAML (anything else) document
///
/// # Errors
/// Unreadable or malformed file
pub fn read_document<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        serde_json::from_str(&text).with_context(|| format!("Invalid JSON in {}", path.display()))
    } else {
        serde_yaml::from_str(&text).with_context(|| format!("Invalid YAML in {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_action() {
        let script: Script = serde_yaml::from_str(
            r#"
steps:
  - action: set
    field: modelNumber
    value: HP-2000
  - action: fill
    values:
      csaCompliance: true
      installerName: Jordan Lee
  - action: submit
  - action: goto
    to: control
  - action: goto
    to: summary
  - action: summary
  - action: clear
"#,
        )
        .unwrap();

        assert_eq!(script.steps.len(), 7);
        assert_eq!(
            script.steps[0],
            Step::Set {
                field: "modelNumber".into(),
                value: FieldValue::from("HP-2000")
            }
        );
        let Step::Fill { values } = &script.steps[1] else {
            panic!("fill expected");
        };
        assert_eq!(values.get("csaCompliance"), Some(&FieldValue::Flag(true)));
        assert_eq!(
            script.steps[3],
            Step::Goto {
                to: Destination::Section(SectionId::Control)
            }
        );
        assert_eq!(script.steps[4], Step::Goto { to: Destination::Summary });
    }

    #[test]
    fn unknown_action_is_rejected() {
        let result: Result<Script, _> = serde_json::from_str(r#"{"steps":[{"action":"print"}]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn rejected_submit_reports_section() {
        let mut session = CommissioningSession::new();
        let outcome = Step::Submit.apply(&mut session);
        let StepOutcome::Rejected { section, errors } = outcome else {
            panic!("rejection expected");
        };
        assert_eq!(section, SectionId::Equipment);
        assert!(errors.contains("modelNumber"));
    }

    #[test]
    fn input_on_summary_is_ignored() {
        let mut session = CommissioningSession::new();
        Step::Summary.apply(&mut session);
        let outcome = Step::Set {
            field: "modelNumber".into(),
            value: FieldValue::from("x"),
        }
        .apply(&mut session);
        assert_eq!(outcome, StepOutcome::Ignored);
    }
}
