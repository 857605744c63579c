//! CLI argument definitions and `RunProfile` construction.
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::RunProfile;

/// Parsed command intent from CLI.
#[derive(Debug, Clone)]
pub enum ParsedCommand {
    /// Default mode: run the pre-flight check.
    RunCheck(RunProfile),
    /// Utility command mode.
    Cli {
        command: CliCommand,
        profile: RunProfile,
    },
}

/// Top-level optional CLI commands.
#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Print the resolved configuration without probing the project files.
    #[command(about = "Print the resolved project root and expected file list as JSON")]
    List,
}

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Verify expected source files exist before manually adding them to an Xcode project",
    long_about = None
)]
pub struct PrecheckArgs {
    /// Path to config.toml (overrides XCPREFLIGHT_CONFIG).
    #[arg(long = "config")]
    pub config_override: Option<PathBuf>,
    /// Project root to check against; must be absolute (overrides [project].root).
    #[arg(long = "project-root")]
    pub root_override: Option<PathBuf>,
    /// Optional CLI command mode.
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

impl PrecheckArgs {
    /// Parse CLI args into either check mode or utility command mode.
    pub fn into_command(self) -> Result<ParsedCommand> {
        let profile = RunProfile::from_overrides(self.config_override, self.root_override)?;

        Ok(match self.command {
            Some(command) => ParsedCommand::Cli { command, profile },
            None => ParsedCommand::RunCheck(profile),
        })
    }
}
