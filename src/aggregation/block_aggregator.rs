//! Per-block scoring and recommendation lists.
//!
//! Blocks are identified by exact string equality and kept in the order
//! they first appear in the answer sequence.

use crate::core::{AnswerRecord, RiskScore};
use crate::errors::ReportError;
use crate::scoring::score_scope;
use indexmap::IndexMap;
use serde::Serialize;

/// Block name to result, iterated in first-seen order.
pub type BlockResults = IndexMap<String, BlockResult>;

/// Score and follow-up items for one block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockResult {
    pub block: String,
    pub score: RiskScore,
    /// Every record of the block, in answer order.
    pub records: Vec<AnswerRecord>,
    /// Records answered anything other than Yes, in answer order.
    pub recommendations: Vec<AnswerRecord>,
}

impl BlockResult {
    pub fn has_recommendations(&self) -> bool {
        !self.recommendations.is_empty()
    }
}

/// Partition records by block, keeping first-seen block order and the
/// original order within each block.
pub fn group_by_block(records: &[AnswerRecord]) -> IndexMap<&str, Vec<AnswerRecord>> {
    records
        .iter()
        .fold(IndexMap::new(), |mut groups: IndexMap<&str, Vec<AnswerRecord>>, record| {
            groups
                .entry(record.block.as_str())
                .or_default()
                .push(record.clone());
            groups
        })
}

/// Score every block and collect its recommendations.
pub fn aggregate(records: &[AnswerRecord]) -> Result<BlockResults, ReportError> {
    group_by_block(records)
        .into_iter()
        .map(|(block, block_records)| {
            let score = score_scope(&format!("block '{block}'"), &block_records)?;
            let recommendations = block_records
                .iter()
                .filter(|r| r.needs_attention())
                .cloned()
                .collect();

            Ok((
                block.to_string(),
                BlockResult {
                    block: block.to_string(),
                    score,
                    records: block_records,
                    recommendations,
                },
            ))
        })
        .collect()
}
