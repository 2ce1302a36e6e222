mod cli;
mod config;
mod domain;
mod errors;
mod service;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use cli::Cli;
use deploy_common::logging;

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on environment
    if let Err(e) = logging::init_logging() {
        eprintln!("error: {}", e);
        return ExitCode::FAILURE;
    }

    let quiet = cli.quiet;
    let config = cli.into_config();

    let result = if quiet {
        service::render(&config, &mut io::sink())
    } else {
        service::render(&config, &mut io::stdout().lock())
    };

    match result {
        Ok(report) => {
            tracing::debug!(
                "Rendered {} bytes with {} replacements, {} unresolved",
                report.bytes_written,
                report.replacements,
                report.unresolved.len()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Failed to render template: {}", e);
            eprintln!("error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
