//! Load and validate pre-flight configuration.
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{error, info};

use crate::cli::{ConfigSource, RunProfile};
use crate::lib::{errors::ConfigError, paths};

/// Project name assumed when no configuration overrides it.
pub const DEFAULT_PROJECT_NAME: &str = "SamoTetris";
/// Project root assumed when no configuration overrides it.
pub const DEFAULT_PROJECT_ROOT: &str = "/Users/yanashevchuk/Documents/SamoTetris";
/// Files expected on disk before manual registration.
pub const DEFAULT_EXPECTED_FILES: [&str; 4] = [
    "ModernTetris/Core/Currency/CurrencyManager.swift",
    "ModernTetris/Core/Shop/ShopItem.swift",
    "ModernTetris/Core/Shop/ShopManager.swift",
    "ModernTetris/Features/Shop/Views/ShopView.swift",
];

/// Project identity settings.
#[derive(Debug, Clone)]
pub struct ProjectSection {
    pub root: PathBuf,
    pub name: String,
}

/// Top-level configuration container.
#[derive(Debug, Clone)]
pub struct PrecheckConfig {
    pub project: ProjectSection,
    pub expected_files: Vec<String>,
    /// File the configuration came from; `None` for built-in defaults.
    pub source_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawPrecheckConfig {
    project: Option<RawProjectSection>,
    precheck: Option<RawPrecheckSection>,
}

#[derive(Debug, Deserialize, Default)]
struct RawProjectSection {
    root: Option<PathBuf>,
    name: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct RawPrecheckSection {
    expected_files: Option<Vec<String>>,
}

impl PrecheckConfig {
    /// Resolve configuration for a run profile.
    ///
    /// A missing *default* `config.toml` falls back to the built-in
    /// defaults so a bare invocation needs no setup. An explicitly named
    /// config file (CLI flag or environment variable) must exist.
    pub fn resolve(profile: &RunProfile) -> Result<Self, ConfigError> {
        let mut config = if !profile.config_path.exists()
            && profile.config_source == ConfigSource::Default
        {
            info!(
                target: "xcpreflight::config",
                path = %profile.config_path.display(),
                "No config file at default path; using built-in defaults"
            );
            Self::builtin()
        } else {
            Self::load_from_path(profile.config_path.clone())?
        };

        if let Some(root) = &profile.root_override {
            config.project.root = root.clone();
        }
        Ok(config)
    }

    /// Built-in defaults matching the shipped `config.toml`.
    pub fn builtin() -> Self {
        Self {
            project: ProjectSection {
                root: PathBuf::from(DEFAULT_PROJECT_ROOT),
                name: DEFAULT_PROJECT_NAME.to_string(),
            },
            expected_files: DEFAULT_EXPECTED_FILES
                .iter()
                .map(|entry| entry.to_string())
                .collect(),
            source_path: None,
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        info!(
            target: "xcpreflight::config",
            path = %path.display(),
            "Starting configuration load"
        );

        let builder = config::Config::builder().add_source(config::File::from(path.clone()));
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "xcpreflight::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let raw: RawPrecheckConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "xcpreflight::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        let config = Self::from_raw(raw, path.clone()).map_err(|err| {
            error!(
                target: "xcpreflight::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate configuration file"
            );
            err
        })?;

        Ok(config)
    }

    fn from_raw(raw: RawPrecheckConfig, path: PathBuf) -> Result<Self, ConfigError> {
        let project = parse_project_section(raw.project, &path)?;
        let expected_files = parse_precheck_section(raw.precheck, &path)?;

        Ok(Self {
            project,
            expected_files,
            source_path: Some(path),
        })
    }
}

fn parse_project_section(
    raw: Option<RawProjectSection>,
    path: &Path,
) -> Result<ProjectSection, ConfigError> {
    let project_raw = raw.unwrap_or_default();

    let root = project_raw
        .root
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PROJECT_ROOT));
    if !paths::is_nonempty_absolute(&root) {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "project.root",
            message: "Use a non-empty absolute path".into(),
        });
    }

    let name = project_raw
        .name
        .unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string());
    if name.trim().is_empty() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "project.name",
            message: "Project name must not be empty".into(),
        });
    }

    Ok(ProjectSection { root, name })
}

fn parse_precheck_section(
    raw: Option<RawPrecheckSection>,
    path: &Path,
) -> Result<Vec<String>, ConfigError> {
    let expected_files = raw
        .unwrap_or_default()
        .expected_files
        .unwrap_or_else(|| {
            DEFAULT_EXPECTED_FILES
                .iter()
                .map(|entry| entry.to_string())
                .collect()
        });

    // An empty list is allowed; the check then succeeds vacuously.
    for entry in &expected_files {
        if !paths::is_clean_relative(Path::new(entry)) {
            return Err(ConfigError::InvalidField {
                path: path.to_path_buf(),
                field: "precheck.expected_files",
                message: format!(
                    "Entry `{entry}` must be a relative path without `..` components"
                ),
            });
        }
    }

    Ok(expected_files)
}
