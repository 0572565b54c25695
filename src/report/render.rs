//! Hand-off of an assembled report to a page writer.

use super::{ReportData, ReportMeta, Section};
use crate::errors::ReportError;
use tracing::debug;

/// Output backend for assembled reports (markdown, JSON, terminal, PDF...).
///
/// `render_report` calls `begin` once, `write_section` once per section in
/// order, then `finish`.
pub trait PageWriter {
    fn begin(&mut self, _meta: &ReportMeta) -> anyhow::Result<()> {
        Ok(())
    }

    fn write_section(&mut self, section: &Section) -> anyhow::Result<()>;

    fn finish(&mut self, _report: &ReportData) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Stream every section of `report` through `writer`.
///
/// A writer failure is reported with the section it happened in.
pub fn render_report<W>(report: &ReportData, writer: &mut W) -> Result<(), ReportError>
where
    W: PageWriter + ?Sized,
{
    writer
        .begin(&report.meta)
        .map_err(|e| ReportError::writer_failure("report header", e))?;

    for section in &report.sections {
        debug!(section = %section.label(), "writing section");
        writer
            .write_section(section)
            .map_err(|e| ReportError::writer_failure(section.label(), e))?;
    }

    writer
        .finish(report)
        .map_err(|e| ReportError::writer_failure("report footer", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Answer, AnswerRecord};
    use crate::errors::Collaborator;
    use crate::report::{ReportAssembler, TextChartProvider};

    #[derive(Default)]
    struct RecordingWriter {
        events: Vec<String>,
        fail_on: Option<&'static str>,
    }

    impl PageWriter for RecordingWriter {
        fn begin(&mut self, meta: &ReportMeta) -> anyhow::Result<()> {
            self.events.push(format!("begin {}", meta.title));
            Ok(())
        }

        fn write_section(&mut self, section: &Section) -> anyhow::Result<()> {
            let label = section.label();
            if self.fail_on.is_some_and(|f| label.contains(f)) {
                anyhow::bail!("out of paper");
            }
            self.events.push(label);
            Ok(())
        }

        fn finish(&mut self, _report: &ReportData) -> anyhow::Result<()> {
            self.events.push("finish".to_string());
            Ok(())
        }
    }

    fn report() -> ReportData {
        let records = vec![
            AnswerRecord::new("Access", "q1", Answer::No, 1.0, "r1"),
            AnswerRecord::new("Privacy", "q2", Answer::Yes, 1.0, "r2"),
        ];
        ReportAssembler::default()
            .assemble(&records, &mut TextChartProvider::default())
            .unwrap()
    }

    #[test]
    fn sections_are_written_in_order() {
        let mut writer = RecordingWriter::default();
        render_report(&report(), &mut writer).unwrap();

        assert_eq!(writer.events.first().map(String::as_str), Some("begin ASPE - Security Audit"));
        assert_eq!(writer.events.last().map(String::as_str), Some("finish"));
        assert_eq!(writer.events.len(), 7);
    }

    #[test]
    fn writer_failure_names_the_section() {
        let mut writer = RecordingWriter {
            fail_on: Some("'Privacy'"),
            ..Default::default()
        };
        let err = render_report(&report(), &mut writer).unwrap_err();

        match err {
            ReportError::Collaborator {
                collaborator,
                context,
                ..
            } => {
                assert_eq!(collaborator, Collaborator::PageWriter);
                assert_eq!(context, "chart section for block 'Privacy'");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(!writer.events.contains(&"finish".to_string()));
    }
}
