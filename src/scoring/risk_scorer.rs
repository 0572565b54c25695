//! Weighted risk scoring.
//!
//! Every record contributes `weight * points(answer)` failure points out of
//! a worst case of `weight * 2`. The risk percentage is the ratio of the
//! two, scaled to 0..=100 and rounded half-up.
//!
//! Weights are read as the decimal they were written as (`4.1` is exactly
//! 4.1, not the nearest binary float) and all sums are exact [`Decimal`]
//! arithmetic. A true 20.5% therefore always rounds to 21, and the result
//! is identical for any permutation of the input.

use crate::core::{Answer, AnswerRecord, RiskScore};
use crate::errors::{InputError, ReportError};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;
use tracing::debug;

/// Scope name used when scoring a whole answer set.
pub const OVERALL_SCOPE: &str = "overall";

/// Score a whole answer set.
pub fn score(records: &[AnswerRecord]) -> Result<RiskScore, ReportError> {
    score_scope(OVERALL_SCOPE, records)
}

/// Score `records`, naming `scope` in any division guard failure.
pub fn score_scope(scope: &str, records: &[AnswerRecord]) -> Result<RiskScore, ReportError> {
    validate_records(records)?;

    let mut points = Decimal::ZERO;
    let mut max_points = Decimal::ZERO;
    for record in records {
        let weight = decimal_weight(record)?;
        points = accumulate(points, weight, record.answer.points())
            .ok_or_else(|| overflow(scope))?;
        max_points = accumulate(max_points, weight, Answer::MAX_POINTS)
            .ok_or_else(|| overflow(scope))?;
    }
    let percent = risk_percent(points, max_points, scope)?;

    debug!(
        scope,
        records = records.len(),
        points = %points,
        max_points = %max_points,
        percent,
        "scored answer subset"
    );

    Ok(RiskScore::from_percent(percent))
}

/// Reject answer sets that cannot be scored.
pub fn validate_records(records: &[AnswerRecord]) -> Result<(), InputError> {
    if records.is_empty() {
        return Err(InputError::EmptyAnswerSet);
    }

    for record in records {
        if record.block.trim().is_empty() {
            return Err(InputError::EmptyBlock {
                question: record.question.clone(),
            });
        }
        // `!(w > 0.0)` also catches NaN
        if !(record.weight > 0.0) || !record.weight.is_finite() {
            return Err(InputError::NonPositiveWeight {
                question: record.question.clone(),
                weight: record.weight,
            });
        }
    }

    Ok(())
}

/// `round(100 * points / max_points)`, half-up.
pub fn risk_percent(points: Decimal, max_points: Decimal, scope: &str) -> Result<u8, ReportError> {
    if max_points <= Decimal::ZERO {
        return Err(ReportError::DivisionGuard {
            scope: scope.to_string(),
            total: max_points.to_f64().unwrap_or_default(),
        });
    }

    let ratio = points
        .checked_div(max_points)
        .and_then(|r| r.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or_else(|| overflow(scope))?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);

    Ok(ratio.to_u8().unwrap_or(100))
}

/// The weight as written: the shortest decimal text that round-trips to
/// the stored float.
fn decimal_weight(record: &AnswerRecord) -> Result<Decimal, InputError> {
    Decimal::from_str(&record.weight.to_string()).map_err(|_| InputError::WeightOutOfRange {
        question: record.question.clone(),
        weight: record.weight,
    })
}

fn accumulate(total: Decimal, weight: Decimal, points: u8) -> Option<Decimal> {
    weight
        .checked_mul(Decimal::from(points))
        .and_then(|p| total.checked_add(p))
}

fn overflow(scope: &str) -> ReportError {
    ReportError::DivisionGuard {
        scope: scope.to_string(),
        total: f64::INFINITY,
    }
}
