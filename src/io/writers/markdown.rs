use crate::report::{
    BlockMaturity, BlockRecommendations, ChartImage, PageWriter, ReportData, ReportMeta, Section,
};
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
    with_timestamp: bool,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            with_timestamp: true,
        }
    }

    /// Omit the generation timestamp, for reproducible output.
    pub fn without_timestamp(writer: W) -> Self {
        Self {
            writer,
            with_timestamp: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> PageWriter for MarkdownWriter<W> {
    fn begin(&mut self, meta: &ReportMeta) -> anyhow::Result<()> {
        writeln!(self.writer, "# {}", meta.title)?;
        writeln!(self.writer)?;
        if self.with_timestamp {
            writeln!(
                self.writer,
                "Generated: {}",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
            )?;
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_section(&mut self, section: &Section) -> anyhow::Result<()> {
        match section {
            Section::Summary {
                profile,
                risk_percent,
                tier,
                chart,
                ..
            } => {
                writeln!(self.writer, "## Overall Result")?;
                writeln!(self.writer)?;
                if let Some(profile) = profile {
                    writeln!(self.writer, "Profile assessed: **{profile}**")?;
                    writeln!(self.writer)?;
                }
                writeln!(self.writer, "| Metric | Value |")?;
                writeln!(self.writer, "|--------|-------|")?;
                writeln!(self.writer, "| Risk | {risk_percent}% |")?;
                writeln!(self.writer, "| Diagnosis | {tier} |")?;
                writeln!(self.writer)?;
                self.write_chart(chart)
            }
            Section::BlockMaturity { blocks } => self.write_maturity(blocks),
            Section::BlockChart { block, chart } => {
                writeln!(self.writer, "### Answer Distribution - {block}")?;
                writeln!(self.writer)?;
                self.write_chart(chart)
            }
            Section::Recommendations { blocks } => self.write_recommendations(blocks),
        }
    }

    fn finish(&mut self, _report: &ReportData) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_chart(&mut self, chart: &ChartImage) -> anyhow::Result<()> {
        match chart.as_text() {
            Some(text) => {
                writeln!(self.writer, "```text")?;
                write!(self.writer, "{text}")?;
                if !text.ends_with('\n') {
                    writeln!(self.writer)?;
                }
                writeln!(self.writer, "```")?;
            }
            None => writeln!(
                self.writer,
                "_[{} chart, {} bytes]_",
                chart.media_type,
                chart.data.len()
            )?,
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_maturity(&mut self, blocks: &[BlockMaturity]) -> anyhow::Result<()> {
        writeln!(self.writer, "## Maturity by Block")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Block | Maturity | Risk |")?;
        writeln!(self.writer, "|-------|----------|------|")?;
        for b in blocks {
            writeln!(self.writer, "| {} | {} | {}% |", b.block, b.tier, b.risk_percent)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_recommendations(&mut self, blocks: &[BlockRecommendations]) -> anyhow::Result<()> {
        writeln!(self.writer, "## Recommendations by Block")?;
        writeln!(self.writer)?;
        for block in blocks {
            writeln!(self.writer, "### {}", block.block)?;
            writeln!(self.writer)?;
            if block.items.is_empty() {
                writeln!(self.writer, "_No additional recommendations._")?;
            }
            for item in &block.items {
                writeln!(self.writer, "- {} ({})", item.question, item.answer)?;
                writeln!(self.writer, "  - {}", item.recommendation)?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }
}
