//! CLI entrypoint module structure.
use anyhow::Result;
use serde_json::json;

use crate::precheck::config::PrecheckConfig;

pub mod args;
pub mod profile;

pub use args::{CliCommand, ParsedCommand, PrecheckArgs};
pub use profile::{resolve_config_path, ConfigSource, RunProfile};

/// Execute CLI command mode and return a user-facing result payload.
pub fn execute_cli_command(command: CliCommand, profile: RunProfile) -> Result<String> {
    match command {
        CliCommand::List => {
            let config = PrecheckConfig::resolve(&profile)?;
            let config_source = match &config.source_path {
                Some(path) => path.to_string_lossy().into_owned(),
                None => "builtin".to_string(),
            };

            let payload = json!({
                "project_root": config.project.root.to_string_lossy(),
                "project_name": config.project.name,
                "expected_files": config.expected_files,
                "config_source": config_source,
            });

            Ok(serde_json::to_string_pretty(&payload)?)
        }
    }
}
