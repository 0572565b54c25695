use super::{Question, QuestionBank};
use crate::errors::InputError;
use crate::io;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

/// On-disk encodings a bank can be read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BankFormat {
    Toml,
    Json,
}

impl BankFormat {
    /// Pick a format from the file extension; anything but `.json` is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => BankFormat::Json,
            _ => BankFormat::Toml,
        }
    }
}

/// A row as written in the file; every field may be missing.
#[derive(Debug, Deserialize)]
struct RawQuestion {
    profile: Option<String>,
    block: Option<String>,
    #[serde(alias = "question")]
    text: Option<String>,
    weight: Option<f64>,
    recommendation: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawBank {
    #[serde(default, alias = "questions")]
    question: Vec<RawQuestion>,
}

impl RawQuestion {
    /// Rows with a blank or missing field are unusable.
    fn into_question(self) -> Option<Question> {
        fn present(field: Option<String>) -> Option<String> {
            field.filter(|s| !s.trim().is_empty())
        }

        Some(Question {
            profile: present(self.profile)?,
            block: present(self.block)?,
            text: present(self.text)?,
            weight: self.weight?,
            recommendation: present(self.recommendation)?,
        })
    }
}

/// Parse bank contents, dropping incomplete rows.
pub fn parse_question_bank(contents: &str, format: BankFormat) -> Result<QuestionBank, InputError> {
    let raw: RawBank = match format {
        BankFormat::Toml => toml::from_str(contents).map_err(|e| InputError::InvalidQuestionBank {
            message: e.to_string(),
        })?,
        BankFormat::Json => {
            serde_json::from_str(contents).map_err(|e| InputError::InvalidQuestionBank {
                message: e.to_string(),
            })?
        }
    };

    let total = raw.question.len();
    let questions: Vec<Question> = raw
        .question
        .into_iter()
        .enumerate()
        .filter_map(|(index, row)| {
            let parsed = row.into_question();
            if parsed.is_none() {
                warn!(row = index + 1, "skipping question with missing fields");
            }
            parsed
        })
        .collect();

    if questions.is_empty() {
        return Err(InputError::InvalidQuestionBank {
            message: format!("none of the {total} question rows is complete"),
        });
    }

    debug!(kept = questions.len(), total, "parsed question bank");
    Ok(QuestionBank::new(questions))
}

/// Read and parse a bank file.
pub fn load_question_bank(path: &Path) -> Result<QuestionBank> {
    let contents = io::read_file(path)
        .with_context(|| format!("Failed to read question bank {}", path.display()))?;
    let bank = parse_question_bank(&contents, BankFormat::from_path(path))
        .with_context(|| format!("Failed to load question bank {}", path.display()))?;
    Ok(bank)
}
