use super::writers::{JsonWriter, MarkdownWriter, TerminalWriter};
use crate::report::PageWriter;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Markdown,
    #[default]
    Terminal,
}

/// Page writer for `format`, writing to `out`. `color` only affects the
/// terminal format.
pub fn create_writer<'a>(
    format: OutputFormat,
    out: Box<dyn Write + 'a>,
    color: bool,
) -> Box<dyn PageWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(out)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(out)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(out, color)),
    }
}
