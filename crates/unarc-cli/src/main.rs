//! Unarc CLI - extracts zip and 7z archives into a folder next to them.

mod cli;
mod commands;
mod error;
mod logging;
mod output;
mod progress;
mod prompt;

use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    if let Err(e) = logging::setup_logging(&cli.log_level) {
        eprintln!("failed to initialize logging: {e:#}");
    }

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);
    let show_progress = !cli.quiet && !cli.json && progress::CliProgress::should_show();

    let result = match &cli.command {
        cli::Commands::Extract(args) => {
            commands::extract::execute(args, &*formatter, show_progress).map(|()| true)
        }
        cli::Commands::Check(args) => commands::check::execute(args, &*formatter),
        cli::Commands::Actions(args) => commands::actions::execute(args, &*formatter).map(|()| true),
        cli::Commands::Completion { shell } => {
            commands::completion::execute(*shell);
            Ok(true)
        }
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            formatter.format_error(cli.command.operation(), &e);
            ExitCode::FAILURE
        }
    }
}
