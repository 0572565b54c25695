use crate::formatting::ColorMode;
use crate::io::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "aspe")]
#[command(about = "Security maturity questionnaire scoring and reporting", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score an answer sheet and write the maturity report
    Report {
        /// Answer sheet (TOML with [[answer]] entries)
        #[arg(short, long)]
        answers: PathBuf,

        /// Profile the answers belong to
        #[arg(short, long)]
        profile: String,

        /// Question bank (TOML or JSON); defaults to questions.path in .aspe.toml
        #[arg(short, long, env = "ASPE_QUESTIONS")]
        questions: Option<PathBuf>,

        /// Output format (defaults to output.default_format in .aspe.toml)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Report title
        #[arg(long)]
        title: Option<String>,

        /// When to use colors in terminal output
        #[arg(long, value_enum, default_value = "auto")]
        color: ColorMode,
    },

    /// List the profiles available in a question bank
    Profiles {
        /// Question bank (TOML or JSON)
        #[arg(short, long, env = "ASPE_QUESTIONS")]
        questions: Option<PathBuf>,

        /// Also list each profile's blocks
        #[arg(long)]
        blocks: bool,
    },

    /// Initialize an .aspe.toml configuration file
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },
}
