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
use service::Outcome;

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
        service::rewrite(&config, &mut io::sink())
    } else {
        service::rewrite(&config, &mut io::stdout().lock())
    };

    match result {
        Ok(Outcome::Updated { path, hosts }) => {
            tracing::debug!("{} now allows {}", path.display(), hosts.join(", "));
            ExitCode::SUCCESS
        }
        Ok(Outcome::Unchanged { path }) => {
            tracing::debug!("{} left unchanged", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Failed to update allowed hosts: {}", e);
            eprintln!("error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
