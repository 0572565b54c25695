//! Answer sheets and their join with a profile's questions.

use super::{Question, QuestionBank};
use crate::core::{Answer, AnswerRecord};
use crate::errors::InputError;
use crate::io;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// One answered question as written in a sheet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SheetEntry {
    pub question: String,
    pub answer: String,
}

/// Answers collected for a diagnostic, keyed by question text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AnswerSheet {
    #[serde(default, alias = "answers")]
    pub answer: Vec<SheetEntry>,
}

impl AnswerSheet {
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse answer sheet")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = io::read_file(path)
            .with_context(|| format!("Failed to read answer sheet {}", path.display()))?;
        Self::from_toml(&contents)
            .with_context(|| format!("Invalid answer sheet {}", path.display()))
    }
}

/// Join `profile`'s questions with `sheet`, in questionnaire order.
///
/// Every question of the profile must be answered and every answer must
/// belong to a question of the profile.
pub fn build_records(
    bank: &QuestionBank,
    profile: &str,
    sheet: &AnswerSheet,
) -> Result<Vec<AnswerRecord>, InputError> {
    let questions: Vec<&Question> = bank.for_profile(profile).collect();
    if questions.is_empty() {
        return Err(InputError::UnknownProfile {
            profile: profile.to_string(),
        });
    }

    // later entries for the same question win
    let mut answers: HashMap<&str, Answer> = HashMap::new();
    for entry in &sheet.answer {
        if !questions.iter().any(|q| q.text == entry.question) {
            return Err(InputError::UnknownQuestion {
                question: entry.question.clone(),
            });
        }
        answers.insert(entry.question.as_str(), entry.answer.parse()?);
    }

    questions
        .into_iter()
        .map(|q| {
            let answer = answers
                .get(q.text.as_str())
                .copied()
                .ok_or_else(|| InputError::MissingAnswer {
                    question: q.text.clone(),
                })?;
            Ok(AnswerRecord::new(
                q.block.clone(),
                q.text.clone(),
                answer,
                q.weight,
                q.recommendation.clone(),
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn bank() -> QuestionBank {
        let q = |profile: &str, block: &str, text: &str, weight: f64| Question {
            profile: profile.into(),
            block: block.into(),
            text: text.into(),
            weight,
            recommendation: format!("fix {text}"),
        };
        QuestionBank::new(vec![
            q("Company", "Access", "MFA?", 3.0),
            q("Home", "Devices", "Disk encrypted?", 1.0),
            q("Company", "Backups", "Offsite?", 2.0),
        ])
    }

    fn sheet(toml: &str) -> AnswerSheet {
        AnswerSheet::from_toml(toml).unwrap()
    }

    #[test]
    fn records_follow_questionnaire_order() {
        let sheet = sheet(indoc! {r#"
            [[answer]]
            question = "Offsite?"
            answer = "partial"

            [[answer]]
            question = "MFA?"
            answer = "No"
        "#});

        let records = build_records(&bank(), "Company", &sheet).unwrap();
        assert_eq!(
            records,
            vec![
                AnswerRecord::new("Access", "MFA?", Answer::No, 3.0, "fix MFA?"),
                AnswerRecord::new("Backups", "Offsite?", Answer::Partial, 2.0, "fix Offsite?"),
            ]
        );
    }

    #[test]
    fn unanswered_question_is_reported() {
        let sheet = sheet(indoc! {r#"
            [[answer]]
            question = "MFA?"
            answer = "yes"
        "#});
        let err = build_records(&bank(), "Company", &sheet).unwrap_err();
        assert_eq!(
            err,
            InputError::MissingAnswer {
                question: "Offsite?".into()
            }
        );
    }

    #[test]
    fn answers_outside_the_profile_are_rejected() {
        let sheet = sheet(indoc! {r#"
            [[answer]]
            question = "Disk encrypted?"
            answer = "yes"
        "#});
        let err = build_records(&bank(), "Company", &sheet).unwrap_err();
        assert!(matches!(err, InputError::UnknownQuestion { .. }));
    }

    #[test]
    fn invalid_answer_value_is_rejected() {
        let sheet = sheet(indoc! {r#"
            [[answer]]
            question = "Disk encrypted?"
            answer = "sometimes"
        "#});
        let err = build_records(&bank(), "Home", &sheet).unwrap_err();
        assert_eq!(
            err,
            InputError::UnknownAnswer {
                value: "sometimes".into()
            }
        );
    }

    #[test]
    fn unknown_profile_is_rejected() {
        let err = build_records(&bank(), "Nobody", &AnswerSheet::default()).unwrap_err();
        assert!(matches!(err, InputError::UnknownProfile { .. }));
    }
}
