//! Quill CLI - access decisions for the publishing API
//!
//! Main entry point for the `quill` binary.

use std::process::ExitCode;

use clap::Parser;
use quill_common_config::Environment;
use tracing::debug;

mod cli;
mod commands;
mod error;

use cli::Cli;
use error::CliError;

/// Application exit codes
#[repr(u8)]
pub enum Exit {
    Success = 0,
    Denied = 1,
    Conflict = 4,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit as u8)
    }
}

fn main() -> ExitCode {
    Environment::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(exit) => exit.into(),
        Err(e) => {
            eprintln!("error: {e}");
            e.exit_code()
        }
    }
}

fn run(cli: Cli) -> Result<Exit, CliError> {
    let config = cli.load_config()?;
    cli.init_logging(&config)?;
    debug!(?config, "configuration loaded");
    cli.execute(&config)
}
