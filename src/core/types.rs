//! Answer records and the values derived from them.
//!
//! An [`AnswerRecord`] is one answered question. Everything else in the
//! crate (scores, block results, report sections) is computed from a
//! sequence of these and never mutated afterwards.

use super::{HIGH_MATURITY_MAX_RISK, INTERMEDIATE_MATURITY_MAX_RISK};
use crate::errors::InputError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three answers a question accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    Yes,
    #[serde(alias = "partially")]
    Partial,
    No,
}

impl Answer {
    pub const ALL: [Answer; 3] = [Answer::Yes, Answer::Partial, Answer::No];

    /// Failure points before weighting: No counts double, Partial counts once.
    pub fn points(self) -> u8 {
        match self {
            Answer::Yes => 0,
            Answer::Partial => 1,
            Answer::No => 2,
        }
    }

    /// Worst-case points any answer can score.
    pub const MAX_POINTS: u8 = 2;

    pub fn label(self) -> &'static str {
        match self {
            Answer::Yes => "Yes",
            Answer::Partial => "Partial",
            Answer::No => "No",
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Answer {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yes" => Ok(Answer::Yes),
            "partial" | "partially" => Ok(Answer::Partial),
            "no" => Ok(Answer::No),
            _ => Err(InputError::UnknownAnswer {
                value: s.to_string(),
            }),
        }
    }
}

/// One answered question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub block: String,
    pub question: String,
    pub answer: Answer,
    pub weight: f64,
    pub recommendation: String,
}

impl AnswerRecord {
    pub fn new(
        block: impl Into<String>,
        question: impl Into<String>,
        answer: Answer,
        weight: f64,
        recommendation: impl Into<String>,
    ) -> Self {
        Self {
            block: block.into(),
            question: question.into(),
            answer,
            weight,
            recommendation: recommendation.into(),
        }
    }

    /// Weighted failure points for the chosen answer.
    pub fn points(&self) -> f64 {
        self.weight * f64::from(self.answer.points())
    }

    /// Weighted points had the answer been the worst one.
    pub fn max_points(&self) -> f64 {
        self.weight * f64::from(Answer::MAX_POINTS)
    }

    /// Whether this record surfaces its recommendation.
    pub fn needs_attention(&self) -> bool {
        self.answer != Answer::Yes
    }
}

/// Maturity band derived from a risk percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaturityTier {
    High,
    Intermediate,
    Low,
}

impl MaturityTier {
    /// Lower bounds are exclusive: 20 is High, 21 is Intermediate, 51 is Low.
    pub fn from_risk(risk_percent: u8) -> Self {
        if risk_percent <= HIGH_MATURITY_MAX_RISK {
            MaturityTier::High
        } else if risk_percent <= INTERMEDIATE_MATURITY_MAX_RISK {
            MaturityTier::Intermediate
        } else {
            MaturityTier::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MaturityTier::High => "High Maturity",
            MaturityTier::Intermediate => "Intermediate Maturity",
            MaturityTier::Low => "Low Maturity",
        }
    }
}

impl fmt::Display for MaturityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Risk percentage and the tier it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskScore {
    pub risk_percent: u8,
    pub tier: MaturityTier,
}

impl RiskScore {
    pub fn from_percent(risk_percent: u8) -> Self {
        Self {
            risk_percent,
            tier: MaturityTier::from_risk(risk_percent),
        }
    }
}
