//! Report structure handed to page writers.
//!
//! A [`ReportData`] carries the overall score, the per-block results and an
//! ordered [`Section`] list. Writers render sections in list order; block
//! order is the first-seen order of the answer sequence everywhere.

pub mod assembler;
pub mod chart;
pub mod render;

pub use assembler::ReportAssembler;
pub use chart::{AnswerDistribution, ChartImage, ChartProvider, TextChartProvider};
pub use render::{render_report, PageWriter};

use crate::aggregation::BlockResults;
use crate::core::{Answer, AnswerRecord, MaturityTier, RiskScore};
use serde::Serialize;

pub const DEFAULT_TITLE: &str = "ASPE - Security Audit";

/// Report heading information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportMeta {
    pub title: String,
    pub profile: Option<String>,
}

impl Default for ReportMeta {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            profile: None,
        }
    }
}

/// One line of the maturity-by-block listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockMaturity {
    pub block: String,
    pub risk_percent: u8,
    pub tier: MaturityTier,
}

/// A question that was not answered Yes, with its guidance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub question: String,
    pub answer: Answer,
    pub recommendation: String,
}

impl From<&AnswerRecord> for Recommendation {
    fn from(record: &AnswerRecord) -> Self {
        Self {
            question: record.question.clone(),
            answer: record.answer,
            recommendation: record.recommendation.clone(),
        }
    }
}

/// Recommendations of one block; empty when every answer was Yes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockRecommendations {
    pub block: String,
    pub items: Vec<Recommendation>,
}

/// Renderable unit of a report, in the order writers should emit them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Section {
    Summary {
        title: String,
        profile: Option<String>,
        risk_percent: u8,
        tier: MaturityTier,
        chart: ChartImage,
    },
    BlockMaturity {
        blocks: Vec<BlockMaturity>,
    },
    BlockChart {
        block: String,
        chart: ChartImage,
    },
    Recommendations {
        blocks: Vec<BlockRecommendations>,
    },
}

impl Section {
    /// Short description used in error context and logs.
    pub fn label(&self) -> String {
        match self {
            Section::Summary { .. } => "summary section".to_string(),
            Section::BlockMaturity { .. } => "maturity by block section".to_string(),
            Section::BlockChart { block, .. } => format!("chart section for block '{block}'"),
            Section::Recommendations { .. } => "recommendations section".to_string(),
        }
    }
}

/// Everything derived from one diagnostic run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportData {
    pub meta: ReportMeta,
    pub overall: RiskScore,
    pub blocks: BlockResults,
    pub records: Vec<AnswerRecord>,
    pub sections: Vec<Section>,
}

impl ReportData {
    pub fn recommendation_count(&self) -> usize {
        self.blocks.values().map(|b| b.recommendations.len()).sum()
    }
}
