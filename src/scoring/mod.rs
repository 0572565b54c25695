pub mod risk_scorer;

pub use risk_scorer::{risk_percent, score, score_scope, validate_records, OVERALL_SCOPE};
