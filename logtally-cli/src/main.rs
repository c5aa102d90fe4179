//! Logtally CLI entry point
//!
//! Parses arguments, loads the effective configuration, initializes logging
//! and dispatches to a subcommand. Errors are printed to stderr and mapped to
//! an exit code via [`CliError::exit_code`].

mod cli;
mod commands;
mod error;
mod logging;
mod output;

use clap::Parser;

use logtally_core::config::{GeneralConfig, LogtallyConfig};

use crate::cli::{Cli, Commands};
use crate::error::CliError;
use crate::output::OutputWriter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("error: {e}");
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let writer = OutputWriter::new(cli.output);
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Report(args) => {
            let config = LogtallyConfig::load_or_default(config_path).await?;
            init_logging(&config.general, cli.log_level.as_deref())?;
            commands::report::execute(args, &config, &writer).await
        }
        Commands::Config(args) => {
            // an invalid config must still be reportable, so log with defaults
            init_logging(&GeneralConfig::default(), cli.log_level.as_deref())?;
            commands::config::execute(args, config_path, &writer).await
        }
    }
}

fn init_logging(general: &GeneralConfig, level_override: Option<&str>) -> Result<(), CliError> {
    logging::init_tracing(general, level_override).map_err(|e| CliError::Config(e.to_string()))
}
