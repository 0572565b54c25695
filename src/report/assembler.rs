//! Composition of scores, block results and charts into a [`ReportData`].

use super::chart::{ChartImage, ChartProvider};
use super::{
    BlockMaturity, BlockRecommendations, Recommendation, ReportData, ReportMeta, Section,
};
use crate::aggregation::{aggregate, BlockResults};
use crate::core::{AnswerRecord, RiskScore};
use crate::errors::ReportError;
use crate::scoring::{score, validate_records};
use tracing::{debug, info_span};

/// Builds reports for a fixed heading.
///
/// The assembler holds no state between calls; every `assemble` computes a
/// fresh report from the records it is given.
#[derive(Debug, Clone, Default)]
pub struct ReportAssembler {
    meta: ReportMeta,
}

impl ReportAssembler {
    pub fn new(meta: ReportMeta) -> Self {
        Self { meta }
    }

    pub fn meta(&self) -> &ReportMeta {
        &self.meta
    }

    /// Score `records` and lay them out as report sections.
    ///
    /// `charts` is called once for the whole set, then once per block in
    /// block order. Any failure aborts the assembly; no partial report is
    /// returned.
    pub fn assemble<P>(
        &self,
        records: &[AnswerRecord],
        charts: &mut P,
    ) -> Result<ReportData, ReportError>
    where
        P: ChartProvider + ?Sized,
    {
        let _span = info_span!("assemble_report", records = records.len()).entered();

        validate_records(records)?;
        let overall = score(records)?;
        let blocks = aggregate(records)?;

        let overall_chart = charts
            .render(records)
            .map_err(|e| ReportError::chart_failure("overall answer distribution", e))?;

        let mut sections = Vec::with_capacity(blocks.len() + 3);
        sections.push(self.summary_section(overall, overall_chart));
        sections.push(maturity_section(&blocks));
        for (name, result) in &blocks {
            let chart = charts
                .render(&result.records)
                .map_err(|e| ReportError::chart_failure(format!("block '{name}'"), e))?;
            sections.push(Section::BlockChart {
                block: name.clone(),
                chart,
            });
        }
        sections.push(recommendations_section(&blocks));

        debug!(
            blocks = blocks.len(),
            sections = sections.len(),
            risk = overall.risk_percent,
            "report assembled"
        );

        Ok(ReportData {
            meta: self.meta.clone(),
            overall,
            blocks,
            records: records.to_vec(),
            sections,
        })
    }

    fn summary_section(&self, overall: RiskScore, chart: ChartImage) -> Section {
        Section::Summary {
            title: self.meta.title.clone(),
            profile: self.meta.profile.clone(),
            risk_percent: overall.risk_percent,
            tier: overall.tier,
            chart,
        }
    }
}

fn maturity_section(blocks: &BlockResults) -> Section {
    Section::BlockMaturity {
        blocks: blocks
            .values()
            .map(|b| BlockMaturity {
                block: b.block.clone(),
                risk_percent: b.score.risk_percent,
                tier: b.score.tier,
            })
            .collect(),
    }
}

fn recommendations_section(blocks: &BlockResults) -> Section {
    Section::Recommendations {
        blocks: blocks
            .values()
            .map(|b| BlockRecommendations {
                block: b.block.clone(),
                items: b.recommendations.iter().map(Recommendation::from).collect(),
            })
            .collect(),
    }
}
