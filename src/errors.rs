//! Error taxonomy for scoring and report assembly.
//!
//! Three families of failure are kept apart:
//!
//! - [`InputError`]: the answer set itself is unusable (empty, a
//!   non-positive weight, an answer outside Yes/Partial/No, ...). Raised
//!   before any arithmetic happens.
//! - [`ReportError::DivisionGuard`]: a scored subset has no positive
//!   maximum to divide by, or its sums overflowed.
//! - [`ReportError::Collaborator`]: a chart provider or page writer failed.
//!   The original error is kept as the source and the block or section
//!   being produced is recorded as context.
//!
//! Nothing here is recovered internally; assembly is all-or-nothing.
//!
//! # Example
//!
//! ```rust
//! use aspe::errors::{InputError, ReportError};
//!
//! let err: ReportError = InputError::EmptyAnswerSet.into();
//! assert_eq!(err.code(), "E010");
//! assert!(err.is_input_error());
//! ```

use std::fmt;
use thiserror::Error;

/// Problems with the answers handed to the engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("answer set is empty")]
    EmptyAnswerSet,

    #[error("question '{question}' has an empty block name")]
    EmptyBlock { question: String },

    #[error("question '{question}' has non-positive weight {weight}")]
    NonPositiveWeight { question: String, weight: f64 },

    #[error("question '{question}' has weight {weight} outside the supported range")]
    WeightOutOfRange { question: String, weight: f64 },

    #[error("'{value}' is not a valid answer (expected yes, partial or no)")]
    UnknownAnswer { value: String },

    #[error("no answer given for question '{question}'")]
    MissingAnswer { question: String },

    #[error("answer given for unknown question '{question}'")]
    UnknownQuestion { question: String },

    #[error("profile '{profile}' has no questions")]
    UnknownProfile { profile: String },

    #[error("invalid question bank: {message}")]
    InvalidQuestionBank { message: String },
}

/// External capability that failed while a report was being produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collaborator {
    ChartProvider,
    PageWriter,
}

impl fmt::Display for Collaborator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collaborator::ChartProvider => f.write_str("chart provider"),
            Collaborator::PageWriter => f.write_str("page writer"),
        }
    }
}

/// Error returned by the scoring and report operations.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Input(#[from] InputError),

    /// Total maximum points for `scope` was zero, or overflowed (reported
    /// as infinity).
    #[error("cannot compute risk for {scope}: total weight {total} is not usable as a divisor")]
    DivisionGuard { scope: String, total: f64 },

    #[error("{collaborator} failed while producing {context}")]
    Collaborator {
        collaborator: Collaborator,
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl ReportError {
    pub fn chart_failure(context: impl Into<String>, source: anyhow::Error) -> Self {
        Self::Collaborator {
            collaborator: Collaborator::ChartProvider,
            context: context.into(),
            source: source.into(),
        }
    }

    pub fn writer_failure(context: impl Into<String>, source: anyhow::Error) -> Self {
        Self::Collaborator {
            collaborator: Collaborator::PageWriter,
            context: context.into(),
            source: source.into(),
        }
    }

    /// Stable code for scripting against failures.
    pub fn code(&self) -> &'static str {
        match self {
            ReportError::Input(_) => "E010",
            ReportError::DivisionGuard { .. } => "E020",
            ReportError::Collaborator {
                collaborator: Collaborator::ChartProvider,
                ..
            } => "E030",
            ReportError::Collaborator {
                collaborator: Collaborator::PageWriter,
                ..
            } => "E031",
        }
    }

    pub fn is_input_error(&self) -> bool {
        matches!(self, ReportError::Input(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn collaborator_errors_keep_source_and_context() {
        let err = ReportError::chart_failure("block 'Backups'", anyhow::anyhow!("disk full"));
        assert_eq!(err.code(), "E030");
        assert_eq!(
            err.to_string(),
            "chart provider failed while producing block 'Backups'"
        );
        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("disk full"));
    }

    #[test]
    fn input_errors_are_transparent() {
        let err: ReportError = InputError::UnknownAnswer {
            value: "maybe".into(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "'maybe' is not a valid answer (expected yes, partial or no)"
        );
        assert_eq!(err.code(), "E010");
    }

    #[test]
    fn writer_failures_have_their_own_code() {
        let err = ReportError::writer_failure("summary", anyhow::anyhow!("broken pipe"));
        assert_eq!(err.code(), "E031");
        assert!(!err.is_input_error());
    }
}
