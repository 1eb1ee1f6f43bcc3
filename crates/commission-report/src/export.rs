//! Final report output
//!
//! A [`ReportSink`] is whatever persists or transmits the finished report
//! (file, printer, upload). [`produce_final`] only reaches the sink when
//! every section holds data.

use std::io::Write;

use commission_schema::SectionId;
use thiserror::Error;

use crate::render::render;
use crate::view::{ReportFormat, ReportView};

/// Errors raised by a sink while emitting
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Report incomplete; missing sections: {}", join_sections(.missing))]
    Incomplete { missing: Vec<SectionId> },

    #[error(transparent)]
    Sink(#[from] SinkError),
}

fn join_sections(sections: &[SectionId]) -> String {
    sections
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Receiver of a completed report
pub trait ReportSink {
    /// Emit the report
    ///
    /// # Errors
    /// Sink-specific failure
    fn emit(&mut self, view: &ReportView) -> Result<(), SinkError>;
}

/// Sink rendering into any [`Write`]
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
    format: ReportFormat,
}

impl<W: Write> WriterSink<W> {
    #[must_use]
    pub fn new(writer: W, format: ReportFormat) -> Self {
        Self { writer, format }
    }

    /// Recover the writer
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for WriterSink<W> {
    fn emit(&mut self, view: &ReportView) -> Result<(), SinkError> {
        let rendered = render(view, self.format)?;
        self.writer.write_all(rendered.as_bytes())?;
        if !rendered.ends_with('\n') {
            self.writer.write_all(b"\n")?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Hand the view to `sink` if the record is complete.
///
/// # Errors
/// [`ExportError::Incomplete`] without touching the sink when sections are
/// missing; otherwise whatever the sink reports
pub fn produce_final(view: &ReportView, sink: &mut dyn ReportSink) -> Result<(), ExportError> {
    if !view.is_complete {
        tracing::warn!(missing = %join_sections(&view.missing), "Final report refused");
        return Err(ExportError::Incomplete {
            missing: view.missing.clone(),
        });
    }
    sink.emit(view)?;
    tracing::info!(blocks = view.blocks.len(), "Final report produced");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::generate;
    use commission_forms::AggregateRecord;

    #[derive(Default)]
    struct CountingSink {
        emitted: usize,
    }

    impl ReportSink for CountingSink {
        fn emit(&mut self, _view: &ReportView) -> Result<(), SinkError> {
            self.emitted += 1;
            Ok(())
        }
    }

    #[test]
    fn incomplete_view_never_reaches_sink() {
        let view = generate(&AggregateRecord::default());
        let mut sink = CountingSink::default();

        let err = produce_final(&view, &mut sink).unwrap_err();

        assert_eq!(sink.emitted, 0);
        assert_eq!(
            err.to_string(),
            "Report incomplete; missing sections: equipment, installation, control, safety, performance"
        );
    }

    #[test]
    fn writer_sink_renders_text() {
        let view = generate(&AggregateRecord::default());
        let mut sink = WriterSink::new(Vec::new(), ReportFormat::Text);
        sink.emit(&view).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert!(text.starts_with("Heat Pump System Summary"));
        assert!(text.ends_with('\n'));
    }
}
