//! Run profile and config-path resolution.
use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context, Result};

use crate::lib::paths;

const DEFAULT_CONFIG: &str = "config.toml";
const CONFIG_ENV: &str = "XCPREFLIGHT_CONFIG";

/// Source for the configuration path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Cli,
    Env,
    Default,
}

/// Resolved inputs for one invocation.
#[derive(Debug, Clone)]
pub struct RunProfile {
    pub config_path: PathBuf,
    pub config_source: ConfigSource,
    pub root_override: Option<PathBuf>,
}

impl RunProfile {
    /// Build a profile from CLI overrides and environment variables.
    pub fn from_overrides(
        config_override: Option<PathBuf>,
        root_override: Option<PathBuf>,
    ) -> Result<Self> {
        if let Some(root) = root_override.as_deref() {
            validate_root_override(root)?;
        }

        let (config_path, config_source) = resolve_config_path(config_override)?;
        Ok(Self {
            config_path,
            config_source,
            root_override,
        })
    }
}

/// Resolve config path in the order: CLI override → env var → default.
pub fn resolve_config_path(override_path: Option<PathBuf>) -> Result<(PathBuf, ConfigSource)> {
    let (path, source) = match override_path {
        Some(path) => (path, ConfigSource::Cli),
        None => match env::var_os(CONFIG_ENV) {
            Some(value) if !value.is_empty() => (PathBuf::from(value), ConfigSource::Env),
            _ => (PathBuf::from(DEFAULT_CONFIG), ConfigSource::Default),
        },
    };

    if path.is_absolute() {
        return Ok((path, source));
    }

    let cwd = env::current_dir().context("failed to obtain current directory")?;
    Ok((cwd.join(path), source))
}

fn validate_root_override(root: &Path) -> Result<()> {
    if !paths::is_nonempty_absolute(root) {
        return Err(anyhow!(
            "--project-root must be an absolute path (got `{}`)",
            root.display()
        ));
    }
    Ok(())
}
