use crate::core::MaturityTier;
use crate::report::{BlockMaturity, ChartImage, PageWriter, ReportData, ReportMeta, Section};
use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use std::io::Write;

pub struct TerminalWriter<W: Write> {
    writer: W,
    color: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, color: bool) -> Self {
        Self { writer, color }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn paint(&self, text: &str, style: fn(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn tier_text(&self, tier: MaturityTier) -> String {
        let style: fn(&str) -> ColoredString = match tier {
            MaturityTier::High => |s| s.green(),
            MaturityTier::Intermediate => |s| s.yellow(),
            MaturityTier::Low => |s| s.red(),
        };
        self.paint(tier.label(), style)
    }

    fn heading(&mut self, text: &str) -> anyhow::Result<()> {
        let line = "───────────────────────────────────────────";
        let title = self.paint(text, |s| s.bold().cyan());
        writeln!(self.writer)?;
        writeln!(self.writer, "{title}")?;
        writeln!(self.writer, "{line}")?;
        Ok(())
    }

    fn write_chart(&mut self, chart: &ChartImage) -> anyhow::Result<()> {
        match chart.as_text() {
            Some(text) => write!(self.writer, "{text}")?,
            None => writeln!(self.writer, "[{} chart, {} bytes]", chart.media_type, chart.data.len())?,
        }
        Ok(())
    }

    fn write_maturity(&mut self, blocks: &[BlockMaturity]) -> anyhow::Result<()> {
        self.heading("Maturity by Block")?;
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["Block", "Maturity", "Risk"]);
        for b in blocks {
            table.add_row(vec![
                Cell::new(&b.block),
                Cell::new(self.tier_text(b.tier)),
                Cell::new(format!("{}%", b.risk_percent)),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        Ok(())
    }
}

impl<W: Write> PageWriter for TerminalWriter<W> {
    fn begin(&mut self, meta: &ReportMeta) -> anyhow::Result<()> {
        let rule = self.paint("═══════════════════════════════════════════", |s| s.cyan());
        let title = self.paint(&meta.title, |s| s.bold().cyan());
        writeln!(self.writer, "{rule}")?;
        writeln!(self.writer, "  {title}")?;
        writeln!(self.writer, "{rule}")?;
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
                self.heading("Overall Result")?;
                if let Some(profile) = profile {
                    writeln!(self.writer, "Profile assessed: {profile}")?;
                }
                writeln!(self.writer, "Risk: {risk_percent}%")?;
                let tier = self.tier_text(*tier);
                writeln!(self.writer, "Diagnosis: {tier}")?;
                writeln!(self.writer)?;
                self.write_chart(chart)
            }
            Section::BlockMaturity { blocks } => self.write_maturity(blocks),
            Section::BlockChart { block, chart } => {
                self.heading(&format!("Answer Distribution - {block}"))?;
                self.write_chart(chart)
            }
            Section::Recommendations { blocks } => {
                self.heading("Recommendations by Block")?;
                for block in blocks {
                    let name = self.paint(&block.block, |s| s.bold());
                    writeln!(self.writer, "{name}")?;
                    if block.items.is_empty() {
                        writeln!(self.writer, "  No additional recommendations.")?;
                    }
                    for item in &block.items {
                        writeln!(self.writer, "  - {} ({})", item.question, item.answer)?;
                        writeln!(self.writer, "    -> {}", item.recommendation)?;
                    }
                }
                Ok(())
            }
        }
    }

    fn finish(&mut self, report: &ReportData) -> anyhow::Result<()> {
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{} answers, {} blocks, {} recommendations",
            report.records.len(),
            report.blocks.len(),
            report.recommendation_count()
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
