//! # peerlens
//!
//! **CLI Binary**
//!
//! This is the entry point for the `peerlens` command-line application.
//!
//! ## Responsibilities
//! * Parse command line arguments
//! * Load settings and set up logging
//! * Dispatch commands to `peerlens-core`
//! * Handle errors and exit codes
//!
//! This crate should contain minimal business logic.

#![forbid(unsafe_code)]

pub mod cli;
mod commands;
mod error_hints;
mod input;

use anyhow::Result;
use clap::Parser;
use peerlens_settings::EngineSettings;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, GlobalArgs};

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "PEERLENS_LOG";

/// Entry point used by the `peerlens` binary.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);
    let settings = load_settings(&cli.global)?;
    commands::dispatch(cli.command, &cli.global, &settings)
}

/// Render an error with its context chain and any matching hints.
pub fn format_error(err: &anyhow::Error) -> String {
    error_hints::format(err)
}

fn verbosity_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(verbosity_filter(verbose)));
    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn load_settings(global: &GlobalArgs) -> Result<EngineSettings> {
    match &global.config {
        Some(path) => {
            let settings = EngineSettings::load(path)?;
            tracing::info!(path = %path.display(), "loaded settings");
            Ok(settings)
        }
        None => Ok(EngineSettings::default()),
    }
}
