//! `quill roles`

use anyhow::Context;
use clap::Args;
use quill_authz::RoleCatalog;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::Exit;

/// List the role catalog
#[derive(Debug, Args)]
pub struct RolesCommand {}

#[derive(Debug, Serialize)]
struct RoleEntry {
    display: &'static str,
    system: &'static str,
}

impl RolesCommand {
    pub fn execute(&self, format: OutputFormat) -> Result<Exit, CliError> {
        let entries: Vec<RoleEntry> = RoleCatalog::entries()
            .map(|(_, display, system)| RoleEntry { display, system })
            .collect();

        match format {
            OutputFormat::Text => {
                for entry in &entries {
                    println!("{:<8} {}", entry.display, entry.system);
                }
            }
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&entries)
                    .context("failed to serialize role catalog")?;
                println!("{json}");
            }
        }

        Ok(Exit::Success)
    }
}
