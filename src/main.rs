use anyhow::Result;
use aspe::cli::{Cli, Commands};
use aspe::commands::{self, ReportOptions};
use aspe::config::load_config;
use aspe::observability::init_logging;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Report {
            answers,
            profile,
            questions,
            format,
            output,
            title,
            color,
        } => {
            let config = load_config();
            let options = ReportOptions::resolve(
                &config, questions, answers, profile, format, output, title, color,
            )?;
            commands::handle_report(options)
        }
        Commands::Profiles { questions, blocks } => {
            let config = load_config();
            let questions = commands::resolve_question_bank(questions, &config)?;
            commands::list_profiles(&questions, blocks)
        }
        Commands::Init { force } => commands::init_config(force),
    }
}
