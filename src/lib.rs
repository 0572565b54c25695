//! Security maturity questionnaire engine.
//!
//! Answers to a profile's questions are scored into a weighted risk
//! percentage and a maturity tier, overall and per block, and laid out as an
//! ordered list of report sections for a page writer to render.
//!
//! ```rust
//! use aspe::{Answer, AnswerRecord, MaturityTier, ReportAssembler, TextChartProvider};
//!
//! let records = vec![
//!     AnswerRecord::new("Access", "Is MFA enforced?", Answer::No, 10.0, "Enforce MFA."),
//!     AnswerRecord::new("Access", "Are passwords managed?", Answer::Yes, 5.0, "Adopt a manager."),
//! ];
//!
//! let report = ReportAssembler::default()
//!     .assemble(&records, &mut TextChartProvider::default())
//!     .unwrap();
//! assert_eq!(report.overall.risk_percent, 67);
//! assert_eq!(report.overall.tier, MaturityTier::Low);
//! ```

pub mod aggregation;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod observability;
pub mod questions;
pub mod report;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{Answer, AnswerRecord, MaturityTier, RiskScore};

pub use crate::errors::{Collaborator, InputError, ReportError};

pub use crate::scoring::{score, score_scope, validate_records};

pub use crate::aggregation::{aggregate, BlockResult, BlockResults};

pub use crate::report::{
    render_report, AnswerDistribution, ChartImage, ChartProvider, PageWriter, ReportAssembler,
    ReportData, ReportMeta, Section, TextChartProvider,
};

pub use crate::questions::{build_records, AnswerSheet, Question, QuestionBank, QuestionCache};

pub use crate::io::{create_writer, OutputFormat};
