use crate::config::AspeConfig;
use crate::core::AnswerRecord;
use crate::formatting::ColorMode;
use crate::io::{create_writer, OutputFormat};
use crate::questions::{build_records, load_question_bank, AnswerSheet};
use crate::report::{render_report, ReportAssembler, ReportData, ReportMeta, TextChartProvider};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Options of the `report` command, after merging CLI and configuration.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub questions: PathBuf,
    pub answers: PathBuf,
    pub profile: String,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub title: String,
    pub chart_width: usize,
    pub color: ColorMode,
}

impl ReportOptions {
    #[allow(clippy::too_many_arguments)]
    pub fn resolve(
        config: &AspeConfig,
        questions: Option<PathBuf>,
        answers: PathBuf,
        profile: String,
        format: Option<OutputFormat>,
        output: Option<PathBuf>,
        title: Option<String>,
        color: ColorMode,
    ) -> Result<Self> {
        Ok(Self {
            questions: super::resolve_question_bank(questions, config)?,
            answers,
            profile,
            format: format.unwrap_or_else(|| config.default_format()),
            output,
            title: title.unwrap_or_else(|| config.title()),
            chart_width: config.chart_width(),
            color,
        })
    }
}

/// Load inputs, assemble the report and write it out.
pub fn handle_report(options: ReportOptions) -> Result<()> {
    let records = load_records(&options.questions, &options.answers, &options.profile)?;
    let report = build_report(&options, &records)?;

    info!(
        profile = %options.profile,
        risk = report.overall.risk_percent,
        tier = %report.overall.tier,
        "diagnostic complete"
    );

    match &options.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            write_report(&report, &options, Box::new(BufWriter::new(file)), false)?;
            println!("Report written to {}", path.display());
        }
        None => {
            let color = options.color.apply();
            write_report(&report, &options, Box::new(std::io::stdout()), color)?;
        }
    }
    Ok(())
}

pub(crate) fn load_records(
    questions: &Path,
    answers: &Path,
    profile: &str,
) -> Result<Vec<AnswerRecord>> {
    let bank = load_question_bank(questions)?;
    let sheet = AnswerSheet::load(answers)?;
    let records = build_records(&bank, profile, &sheet)
        .with_context(|| format!("Answers in {} do not match profile '{profile}'", answers.display()))?;
    Ok(records)
}

pub(crate) fn build_report(options: &ReportOptions, records: &[AnswerRecord]) -> Result<ReportData> {
    let assembler = ReportAssembler::new(ReportMeta {
        title: options.title.clone(),
        profile: Some(options.profile.clone()),
    });
    let report = assembler.assemble(records, &mut TextChartProvider::new(options.chart_width))?;
    Ok(report)
}

fn write_report<'a>(
    report: &ReportData,
    options: &ReportOptions,
    out: Box<dyn Write + 'a>,
    color: bool,
) -> Result<()> {
    let mut writer = create_writer(options.format, out, color);
    render_report(report, writer.as_mut())?;
    Ok(())
}
