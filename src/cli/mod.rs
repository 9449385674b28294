//! CLI module for Keyward
//!
//! Provides commands:
//! - `set credential`: resolve a credential from prompts or stdin and save it

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod credential;
pub mod prompts;

/// Keyward credential CLI
#[derive(Parser, Debug)]
#[command(name = "keyward")]
#[command(about = "Set provider credentials interactively or from stdin")]
#[command(version)]
pub struct Cli {
    /// Additional configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Set a resource
    #[command(subcommand)]
    Set(SetCommands),
}

#[derive(Subcommand, Debug)]
pub enum SetCommands {
    /// Set credentials for Github, Gitlab, AWS, UserPass, etc.
    Credential(credential::CredentialArgs),
}

/// Run the CLI command
pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::Set(SetCommands::Credential(args))) => {
            let config = crate::config::load_config(cli.config.as_deref())?;
            credential::run(args, &config)
        }
        None => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            cmd.print_help()?;
            println!();
            Ok(())
        }
    }
}
