//! Keyward - credential setup CLI
//!
//! CLI entry point.

#![forbid(unsafe_code)]

use clap::Parser;
use keyward_core::format_error_for_cli;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod config;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = cli::Cli::parse();

    let default_filter = if cli.verbose {
        "keyward=debug,keyward_core=debug"
    } else {
        "keyward=warn,keyward_core=warn"
    };

    // Prompts own stdout; logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!(
        "Starting keyward v{} ({} edition)",
        env!("CARGO_PKG_VERSION"),
        keyward_core::Edition::from_build()
    );

    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<keyward_core::Error>() {
                Some(core) => eprint!("{}", format_error_for_cli(core)),
                None => eprintln!("Error: {:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}
