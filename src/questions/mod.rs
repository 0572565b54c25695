//! Question bank: the profile-specific questions a diagnostic asks.
//!
//! Banks are loaded from TOML or JSON (see [`loader`]), cached explicitly
//! per file (see [`cache`]) and joined with an answer sheet (see
//! [`answers`]) to produce the [`AnswerRecord`](crate::core::AnswerRecord)
//! sequence the scoring engine consumes.

pub mod answers;
pub mod cache;
pub mod loader;

pub use answers::{build_records, AnswerSheet, SheetEntry};
pub use cache::QuestionCache;
pub use loader::{load_question_bank, parse_question_bank, BankFormat};

use serde::{Deserialize, Serialize};

/// A validated question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub profile: String,
    pub block: String,
    pub text: String,
    pub weight: f64,
    pub recommendation: String,
}

/// All questions of a bank, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Distinct profiles, sorted.
    pub fn profiles(&self) -> Vec<&str> {
        let mut profiles: Vec<&str> = self.questions.iter().map(|q| q.profile.as_str()).collect();
        profiles.sort_unstable();
        profiles.dedup();
        profiles
    }

    /// Questions of `profile`, in bank order.
    pub fn for_profile<'a>(&'a self, profile: &'a str) -> impl Iterator<Item = &'a Question> + 'a {
        self.questions.iter().filter(move |q| q.profile == profile)
    }

    /// Blocks of `profile`, in first-seen order.
    pub fn blocks(&self, profile: &str) -> Vec<&str> {
        self.questions
            .iter()
            .filter(|q| q.profile == profile)
            .fold(Vec::new(), |mut blocks, q| {
                if !blocks.contains(&q.block.as_str()) {
                    blocks.push(q.block.as_str());
                }
                blocks
            })
    }
}
