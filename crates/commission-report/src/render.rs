//! Text and JSON renderers

use std::fmt::Write as _;

use crate::view::{BlockStatus, ReportFormat, ReportView};

/// Render in the requested format
///
/// # Errors
/// Only JSON serialization can fail
pub fn render(view: &ReportView, format: ReportFormat) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Text => Ok(render_text(view)),
        ReportFormat::Json => render_json(view),
    }
}

/// Plain-text summary, one block per section
#[must_use]
pub fn render_text(view: &ReportView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.title);
    let _ = writeln!(out, "{}", "=".repeat(view.title.chars().count()));
    if let Some(warning) = view.warning {
        let _ = writeln!(out, "\n! {warning}");
    }
    for block in &view.blocks {
        let _ = write!(out, "\n{}", block.title);
        if block.status == BlockStatus::Draft {
            out.push_str("  [draft, not validated]");
        }
        out.push('\n');
        let _ = writeln!(out, "{}", "-".repeat(block.title.chars().count()));
        if let Some(placeholder) = block.placeholder {
            let _ = writeln!(out, "  {placeholder}");
        }
        for line in &block.lines {
            let _ = writeln!(out, "  {}: {}", line.label, line.value);
        }
    }
    out
}

/// Pretty-printed JSON of the whole view
///
/// # Errors
/// Propagates serializer failures
pub fn render_json(view: &ReportView) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::generate;
    use commission_forms::AggregateRecord;

    #[test]
    fn empty_text_report_lists_placeholders() {
        let text = render_text(&generate(&AggregateRecord::default()));
        assert!(text.starts_with("Heat Pump System Summary\n========================\n"));
        assert!(text.contains("! Please complete all sections to generate a full report."));
        assert!(text.contains("Safety & Compliance\n"));
        assert!(text.contains("  No performance metrics provided yet.\n"));
    }

    #[test]
    fn json_carries_status_and_completeness() {
        let json = render_json(&generate(&AggregateRecord::default())).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["is_complete"], serde_json::Value::Bool(false));
        assert_eq!(value["blocks"][0]["status"], "not_provided");
        assert_eq!(value["blocks"][0]["section"], "equipment");
        assert_eq!(value["missing"].as_array().map(Vec::len), Some(5));
    }
}
