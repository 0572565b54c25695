//! CLI command implementations.
//!
//! Available commands:
//! - **report**: Score an answer sheet and write the maturity report
//! - **profiles**: List the profiles (and blocks) of a question bank
//! - **init**: Initialize a new aspe configuration file

pub mod init;
pub mod profiles;
pub mod report;

pub use init::init_config;
pub use profiles::list_profiles;
pub use report::{handle_report, ReportOptions};

use crate::config::AspeConfig;
use anyhow::Result;
use std::path::PathBuf;

/// Question bank from the command line, else from configuration.
pub fn resolve_question_bank(
    explicit: Option<PathBuf>,
    config: &AspeConfig,
) -> Result<PathBuf> {
    explicit
        .or_else(|| config.question_bank().cloned())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "No question bank given. Pass --questions or set questions.path in .aspe.toml"
            )
        })
}
