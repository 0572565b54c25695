//! `.aspe.toml` configuration.
//!
//! Every section is optional; accessors fall back to built-in defaults so a
//! missing or partial file behaves like an empty one.

pub mod loader;

pub use loader::{load_config, parse_and_validate_config, CONFIG_FILE_NAME};

use crate::io::OutputFormat;
use crate::report::DEFAULT_TITLE;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for aspe
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AspeConfig {
    #[serde(default)]
    pub report: Option<ReportConfig>,

    #[serde(default)]
    pub questions: Option<QuestionsConfig>,

    #[serde(default)]
    pub output: Option<OutputConfig>,

    #[serde(default)]
    pub charts: Option<ChartConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_title")]
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionsConfig {
    /// Question bank used when `--questions` is not given.
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub default_format: OutputFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Bar width of text charts, in characters.
    #[serde(default = "default_chart_width")]
    pub width: usize,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_chart_width() -> usize {
    40
}

impl AspeConfig {
    pub fn title(&self) -> String {
        self.report
            .as_ref()
            .map(|r| r.title.clone())
            .unwrap_or_else(default_title)
    }

    pub fn question_bank(&self) -> Option<&PathBuf> {
        self.questions.as_ref().map(|q| &q.path)
    }

    pub fn default_format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .map(|o| o.default_format)
            .unwrap_or_default()
    }

    pub fn chart_width(&self) -> usize {
        self.charts
            .as_ref()
            .map(|c| c.width)
            .unwrap_or_else(default_chart_width)
    }

    /// Reject values that parse but make no sense.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(report) = &self.report {
            if report.title.trim().is_empty() {
                return Err("report.title must not be empty".to_string());
            }
        }
        if let Some(charts) = &self.charts {
            if charts.width == 0 || charts.width > 200 {
                return Err(format!(
                    "charts.width must be between 1 and 200, got {}",
                    charts.width
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = AspeConfig::default();
        assert_eq!(config.title(), DEFAULT_TITLE);
        assert_eq!(config.default_format(), OutputFormat::Terminal);
        assert_eq!(config.chart_width(), 40);
        assert!(config.question_bank().is_none());
    }

    #[test]
    fn zero_chart_width_is_invalid() {
        let config = AspeConfig {
            charts: Some(ChartConfig { width: 0 }),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
