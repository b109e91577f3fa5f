//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `log_report` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output and exit codes
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::builder::PossibleValuesParser;
use clap::{CommandFactory, FromArgMatches};
use std::io;
use std::process;

use log_report::initialization::init_logger_with;
use log_report::{run_report, Config, Opt, ReportOutcome, ReportRegistry};

fn main() -> Result<()> {
    let registry = ReportRegistry::with_builtins();

    // --report choices come from the registry, not from a hardcoded list
    let command = Opt::command().mut_arg("report", |arg| {
        arg.value_parser(PossibleValuesParser::new(registry.names()))
    });
    let opt = Opt::from_arg_matches(&command.get_matches()).unwrap_or_else(|e| e.exit());
    let config = Config::from(opt);

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    // Parse diagnostics share stdout with the report, fatal errors go to stderr
    let mut diagnostics = io::stdout();
    match run_report(&config, &registry, &mut diagnostics) {
        Ok(ReportOutcome::Rendered(output)) => {
            println!("{}", output);
            Ok(())
        }
        Ok(outcome) => {
            println!("{}", outcome.message().unwrap_or_default());
            Ok(())
        }
        Err(e) => {
            log::debug!("{} ({})", e, e.kind());
            eprintln!("Ошибка: {}", e);
            process::exit(1);
        }
    }
}
