pub mod types;

pub use types::{Answer, AnswerRecord, MaturityTier, RiskScore};

/// Highest risk percentage still classified as high maturity.
pub const HIGH_MATURITY_MAX_RISK: u8 = 20;

/// Highest risk percentage still classified as intermediate maturity.
pub const INTERMEDIATE_MATURITY_MAX_RISK: u8 = 50;
