//! Subcommand implementations
//!
//! Each command writes its user-facing output to the given writer and
//! reports failures through `anyhow`. Validation failures are output, not
//! errors: they come back as [`Status::Invalid`].

use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use commission_forms::{AggregateRecord, CommissioningSession};
use commission_report::{
    generate, produce_final, render, ExportError, ReportFormat, ReportSink, ReportView, SinkError,
    WriterSink,
};
use commission_schema::{validate_section, FieldErrors, FieldKind, FieldSpec, FieldValues, SectionId};

use crate::script::{read_document, Script, StepOutcome};

/// Result of a command that ran to completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    /// Input was rejected by validation
    Invalid,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Ok => ExitCode::SUCCESS,
            Status::Invalid => ExitCode::FAILURE,
        }
    }
}

/// Report output settings shared by `run` and `report`
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportSettings {
    pub format: ReportFormat,
    pub require_complete: bool,
}

/// Sink writing the final report to a file, created only when emitting
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    format: ReportFormat,
}

impl FileSink {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, format: ReportFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }
}

impl ReportSink for FileSink {
    fn emit(&mut self, view: &ReportView) -> Result<(), SinkError> {
        let file = std::fs::File::create(&self.path)?;
        WriterSink::new(BufWriter::new(file), self.format).emit(view)?;
        tracing::info!(path = %self.path.display(), "Final report written");
        Ok(())
    }
}

/// `run`: replay a script, print rejected submissions and the report.
///
/// The report is printed either way; any rejected submission makes the
/// result [`Status::Invalid`].
///
/// # Errors
/// Unreadable script, snapshot or output failures, or a missing section
/// when completeness is required
pub fn run_script(
    script: &Path,
    out: Option<&Path>,
    save: Option<&Path>,
    settings: ReportSettings,
    stdout: &mut dyn Write,
) -> anyhow::Result<Status> {
    let script = Script::load(script)?;
    let mut session = CommissioningSession::new();
    let mut status = Status::Ok;
    for outcome in script.replay(&mut session) {
        if let StepOutcome::Rejected { section, errors } = outcome {
            writeln!(stdout, "{section}: submission rejected")?;
            write_errors(stdout, &errors)?;
            status = Status::Invalid;
        }
    }

    if let Some(save) = save {
        let json = serde_json::to_string_pretty(session.record())?;
        std::fs::write(save, json)
            .with_context(|| format!("Failed to write snapshot {}", save.display()))?;
    }

    let view = print_report(session.record(), settings, stdout)?;
    if let Some(out) = out {
        produce_final(&view, &mut FileSink::new(out, settings.format))
            .with_context(|| format!("Final report not written to {}", out.display()))?;
    }
    Ok(status)
}

/// `validate`: check raw values for one section.
///
/// Prints the normalized record as JSON, or the field errors.
///
/// # Errors
/// Unreadable values file
pub fn validate_values(
    section: SectionId,
    values: &Path,
    format: ReportFormat,
    stdout: &mut dyn Write,
) -> anyhow::Result<Status> {
    let values: FieldValues = read_document(values)?;
    match validate_section(section, &values) {
        Ok(record) => {
            writeln!(stdout, "{}", serde_json::to_string_pretty(&record)?)?;
            Ok(Status::Ok)
        }
        Err(errors) => {
            match format {
                ReportFormat::Text => write_errors(stdout, &errors)?,
                ReportFormat::Json => writeln!(stdout, "{}", serde_json::to_string_pretty(&errors)?)?,
            }
            Ok(Status::Invalid)
        }
    }
}

/// `fields`: list declared fields of one or all sections
///
/// # Errors
/// Output failures
pub fn list_fields(
    section: Option<SectionId>,
    format: ReportFormat,
    stdout: &mut dyn Write,
) -> anyhow::Result<Status> {
    let sections = match section {
        Some(section) => vec![section],
        None => SectionId::ALL.to_vec(),
    };
    match format {
        ReportFormat::Text => {
            for section in sections {
                writeln!(stdout, "{} ({section})", section.title())?;
                for spec in section.fields() {
                    writeln!(stdout, "  {}", describe_field(spec))?;
                }
            }
        }
        ReportFormat::Json => {
            let listing: serde_json::Map<String, serde_json::Value> = sections
                .into_iter()
                .map(|section| {
                    let fields = section.fields().iter().map(field_json).collect();
                    (section.to_string(), serde_json::Value::Array(fields))
                })
                .collect();
            writeln!(stdout, "{}", serde_json::to_string_pretty(&listing)?)?;
        }
    }
    Ok(Status::Ok)
}

/// `report`: render a saved snapshot
///
/// # Errors
/// Unreadable snapshot, or a missing section when completeness is required
pub fn render_snapshot(
    snapshot: &Path,
    settings: ReportSettings,
    stdout: &mut dyn Write,
) -> anyhow::Result<Status> {
    let record: AggregateRecord = read_document(snapshot)?;
    print_report(&record, settings, stdout)?;
    Ok(Status::Ok)
}

fn print_report(
    record: &AggregateRecord,
    settings: ReportSettings,
    stdout: &mut dyn Write,
) -> anyhow::Result<ReportView> {
    let view = generate(record);
    if settings.require_complete && !view.is_complete {
        return Err(ExportError::Incomplete {
            missing: view.missing,
        }
        .into());
    }
    let rendered = render(&view, settings.format)?;
    writeln!(stdout, "{}", rendered.trim_end())?;
    Ok(view)
}

fn write_errors(stdout: &mut dyn Write, errors: &FieldErrors) -> std::io::Result<()> {
    for error in errors.iter() {
        writeln!(stdout, "  {error}")?;
    }
    Ok(())
}

fn describe_field(spec: &FieldSpec) -> String {
    let kind = match spec.kind {
        FieldKind::Text => "text",
        FieldKind::Flag => "flag",
    };
    let requirement = if spec.is_required() { "required" } else { "optional" };
    let mut line = format!("{:<28} {:<34} {kind:<4} {requirement}", spec.name, spec.label);
    if let Some(unit) = spec.unit {
        line.push_str(&format!(" [{unit}]"));
    }
    if !spec.options.is_empty() {
        let values: Vec<_> = spec.options.iter().map(|o| o.value).collect();
        line.push_str(&format!(" one of: {}", values.join(", ")));
    }
    if let Some(hint) = spec.hint {
        line.push_str(&format!(" ({hint})"));
    }
    line
}

fn field_json(spec: &FieldSpec) -> serde_json::Value {
    serde_json::json!({
        "name": spec.name,
        "label": spec.label,
        "kind": match spec.kind {
            FieldKind::Text => "text",
            FieldKind::Flag => "flag",
        },
        "required": spec.is_required(),
        "hint": spec.hint,
        "unit": spec.unit,
        "options": spec
            .options
            .iter()
            .map(|o| serde_json::json!({ "value": o.value, "label": o.label }))
            .collect::<Vec<_>>(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_lockout_hint_and_options() {
        let spec = SectionId::Control.field("lowAmbientLockout").unwrap();
        let line = describe_field(spec);
        assert!(line.starts_with("lowAmbientLockout"));
        assert!(line.contains("required"));
        assert!(line.contains("(Must be ≤ 3°C)"));

        let line = describe_field(SectionId::Equipment.field("compressorType").unwrap());
        assert!(line.contains("one of: variable, single, dual"));
    }
}
