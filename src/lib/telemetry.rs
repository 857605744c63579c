//! Telemetry initialization and pre-flight summary helpers.

use anyhow::Result;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize `tracing` and format developer logs.
///
/// Diagnostics go to stderr; the stdout report contract is unaffected by
/// any logging configuration.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Payload for logging the result of a pre-flight scan.
#[derive(Debug, Serialize)]
pub struct PrecheckSummary<'a> {
    pub project_root: &'a str,
    pub expected: usize,
    pub found: usize,
    pub status: &'static str,
    pub first_missing: Option<&'a str>,
}

/// Emit the scan summary to `tracing`.
pub fn emit_precheck_summary(summary: &PrecheckSummary<'_>) {
    info!(
        target: "xcpreflight::precheck",
        project_root = summary.project_root,
        expected = summary.expected,
        found = summary.found,
        status = summary.status,
        first_missing = summary.first_missing.unwrap_or(""),
        "Completed pre-flight scan"
    );
}
