//! Chart capability handed to the assembler.
//!
//! The assembler only ever sees [`ChartImage`] as an opaque handle. The
//! [`AnswerDistribution`] helper and [`TextChartProvider`] exist so callers
//! that have no image library still get a usable chart.

use crate::core::{Answer, AnswerRecord};
use base64::{engine::general_purpose, Engine as _};
use serde::{Serialize, Serializer};
use std::fmt::Write as _;

/// Shares at or below this percentage are drawn but not labelled.
pub const MIN_LABEL_PERCENT: f64 = 1.0;

/// Rendered chart returned by a [`ChartProvider`].
///
/// Serializes with the body inline: `text` for `text/*` charts, `base64`
/// for everything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartImage {
    pub media_type: String,
    pub data: Vec<u8>,
}

impl ChartImage {
    pub fn new(media_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            media_type: media_type.into(),
            data,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::new("text/plain", content.into().into_bytes())
    }

    /// The chart body when it is plain text.
    pub fn as_text(&self) -> Option<&str> {
        if self.media_type.starts_with("text/") {
            std::str::from_utf8(&self.data).ok()
        } else {
            None
        }
    }
}

impl Serialize for ChartImage {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("ChartImage", 2)?;
        state.serialize_field("media_type", &self.media_type)?;
        match self.as_text() {
            Some(text) => state.serialize_field("text", text)?,
            None => state.serialize_field("base64", &general_purpose::STANDARD.encode(&self.data))?,
        }
        state.end()
    }
}

/// Produces a chart for a subset of answers.
pub trait ChartProvider {
    fn render(&mut self, records: &[AnswerRecord]) -> anyhow::Result<ChartImage>;
}

impl<F> ChartProvider for F
where
    F: FnMut(&[AnswerRecord]) -> anyhow::Result<ChartImage>,
{
    fn render(&mut self, records: &[AnswerRecord]) -> anyhow::Result<ChartImage> {
        self(records)
    }
}

/// Count of each answer in a record subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AnswerDistribution {
    pub yes: usize,
    pub partial: usize,
    pub no: usize,
}

impl AnswerDistribution {
    pub fn from_records(records: &[AnswerRecord]) -> Self {
        records.iter().fold(Self::default(), |mut dist, r| {
            match r.answer {
                Answer::Yes => dist.yes += 1,
                Answer::Partial => dist.partial += 1,
                Answer::No => dist.no += 1,
            }
            dist
        })
    }

    pub fn total(&self) -> usize {
        self.yes + self.partial + self.no
    }

    pub fn count(&self, answer: Answer) -> usize {
        match answer {
            Answer::Yes => self.yes,
            Answer::Partial => self.partial,
            Answer::No => self.no,
        }
    }

    /// Share of `answer` in percent; 0 for an empty distribution.
    pub fn percent(&self, answer: Answer) -> f64 {
        match self.total() {
            0 => 0.0,
            total => 100.0 * self.count(answer) as f64 / total as f64,
        }
    }

    /// Label for a slice, omitted when the slice is too thin to read.
    pub fn label(&self, answer: Answer) -> Option<String> {
        let pct = self.percent(answer);
        (pct > MIN_LABEL_PERCENT).then(|| format!("{pct:.1}%"))
    }
}

/// Horizontal bar chart rendered as plain text.
#[derive(Debug, Clone)]
pub struct TextChartProvider {
    width: usize,
}

impl Default for TextChartProvider {
    fn default() -> Self {
        Self::new(40)
    }
}

impl TextChartProvider {
    pub fn new(width: usize) -> Self {
        Self {
            width: width.max(1),
        }
    }

    pub fn draw(&self, distribution: &AnswerDistribution) -> String {
        let mut out = String::new();
        for answer in Answer::ALL {
            let pct = distribution.percent(answer);
            let filled = ((pct / 100.0) * self.width as f64).round() as usize;
            let label = distribution.label(answer).unwrap_or_default();
            let _ = writeln!(
                out,
                "{:<8}|{}{}| {:>3} {}",
                answer.label(),
                "#".repeat(filled),
                " ".repeat(self.width - filled.min(self.width)),
                distribution.count(answer),
                label
            );
        }
        out
    }
}

impl ChartProvider for TextChartProvider {
    fn render(&mut self, records: &[AnswerRecord]) -> anyhow::Result<ChartImage> {
        Ok(ChartImage::text(self.draw(&AnswerDistribution::from_records(records))))
    }
}
