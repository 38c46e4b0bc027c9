//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};
use quill_common_config::{ConfigLoader, QuillConfig};
use quill_common_log::{LogConfig, LogFormat, LogLevel};

use crate::commands::{CheckCommand, RolesCommand};
use crate::error::CliError;
use crate::Exit;

/// Quill - access decisions for the publishing API
///
/// Evaluate role and ownership rules without a running server.
#[derive(Debug, Parser)]
#[command(
    name = "quill",
    author,
    version,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file (defaults to `QUILL_CONFIG_PATH`, then `.quill/config.yaml`)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Decide whether a principal may perform an action
    Check(CheckCommand),

    /// List the role catalog
    Roles(RolesCommand),
}

impl Cli {
    /// Load configuration from `--config`, `QUILL_CONFIG_PATH` or the working directory.
    pub fn load_config(&self) -> Result<QuillConfig, CliError> {
        let loader = match &self.config {
            Some(path) => ConfigLoader::with_path(path),
            None => ConfigLoader::from_env(),
        };
        Ok(loader.load()?)
    }

    /// Initialize logging.
    ///
    /// Precedence, lowest first: config file, `QUILL_LOG_*` / `RUST_LOG`, `-v` flags.
    pub fn init_logging(&self, config: &QuillConfig) -> Result<(), CliError> {
        let log = self.log_config(config);
        quill_common_log::init(log)?;
        Ok(())
    }

    fn log_config(&self, config: &QuillConfig) -> LogConfig {
        let log = LogConfig::default()
            .with_level(LogLevel::parse(&config.log.level).unwrap_or_default())
            .with_format(LogFormat::parse(&config.log.format))
            .with_env_overrides();

        match self.verbose {
            0 => log,
            1 => log.with_level(LogLevel::Info),
            2 => log.with_level(LogLevel::Debug),
            _ => log.with_level(LogLevel::Trace),
        }
    }

    /// Execute the selected command
    pub fn execute(&self, config: &QuillConfig) -> Result<Exit, CliError> {
        match &self.command {
            Command::Check(cmd) => cmd.execute(config, self.format),
            Command::Roles(cmd) => cmd.execute(self.format),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_check() {
        let cli = Cli::try_parse_from([
            "quill", "check", "--principal", "5", "--role", "author",
            "--resource", "article", "--action", "edit", "--owner", "5",
        ])
        .unwrap();
        assert!(matches!(cli.command, Command::Check(_)));
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_verbosity_overrides_configured_level() {
        let mut config = QuillConfig::default();
        config.log.level = "error".into();
        config.log.format = "compact".into();

        let cli = Cli::try_parse_from(["quill", "-vv", "roles"]).unwrap();
        let log = cli.log_config(&config);
        assert_eq!(log.level, LogLevel::Debug);
    }

    #[test]
    fn test_parse_roles_json() {
        let cli = Cli::try_parse_from(["quill", "--format", "json", "roles"]).unwrap();
        assert!(matches!(cli.command, Command::Roles(_)));
        assert_eq!(cli.format, OutputFormat::Json);
    }
}
