//! Pre-flight verification core: ordered scan, fail-fast report, outcome.

pub mod config;
pub mod instructions;

use crate::lib::{
    errors::PrecheckError,
    fs::{probe_expected_entry, resolve_project_root},
    telemetry::{emit_precheck_summary, PrecheckSummary},
};

pub use config::PrecheckConfig;

/// Banner line announcing the start of the check.
pub const START_BANNER: &str = "Adding files to Xcode project...";

/// Terminal outcome of a pre-flight run.
///
/// Returned to the caller rather than exiting the process, so the scan
/// stays usable as a library operation; the binary maps the outcome to an
/// exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrecheckOutcome {
    /// Every expected entry exists under the project root.
    AllPresent { found: Vec<String> },
    /// The scan stopped at the first entry that does not exist. Entries
    /// after it were never probed.
    MissingFile { path: String, found: Vec<String> },
}

impl PrecheckOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, PrecheckOutcome::AllPresent { .. })
    }

    /// Relative paths confirmed present, in list order.
    pub fn found(&self) -> &[String] {
        match self {
            PrecheckOutcome::AllPresent { found } => found,
            PrecheckOutcome::MissingFile { found, .. } => found,
        }
    }

    pub fn first_missing(&self) -> Option<&str> {
        match self {
            PrecheckOutcome::AllPresent { .. } => None,
            PrecheckOutcome::MissingFile { path, .. } => Some(path),
        }
    }

    fn status(&self) -> &'static str {
        match self {
            PrecheckOutcome::AllPresent { .. } => "all_present",
            PrecheckOutcome::MissingFile { .. } => "missing_file",
        }
    }
}

/// Rendered report plus the outcome it describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrecheckReport {
    /// Stdout lines in emission order, blank separators included.
    pub lines: Vec<String>,
    pub outcome: PrecheckOutcome,
}

impl PrecheckReport {
    /// Full stdout payload with a trailing newline.
    pub fn render(&self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}

/// Run the pre-flight verification described by `config`.
///
/// Exactly one of two terminal report shapes is produced: a fail-fast
/// report ending at the first missing path, or a full pass report for
/// every path in order followed by the instruction script. The process
/// working directory is never changed; every entry is resolved by joining
/// it onto the canonical project root.
pub fn run_precheck(config: &PrecheckConfig) -> Result<PrecheckReport, PrecheckError> {
    let root = resolve_project_root(&config.project.root)?;

    let mut lines = vec![START_BANNER.to_string()];
    let mut found = Vec::new();
    let mut first_missing = None;

    for relative in &config.expected_files {
        let result = probe_expected_entry(&root, relative);
        if result.is_present() {
            lines.push(format!("✓ Found: {}", result.relative));
            found.push(result.relative);
        } else {
            // Fail-fast: entries after the first gap are never probed.
            lines.push(format!("✗ Missing: {}", result.relative));
            first_missing = Some(result.relative);
            break;
        }
    }

    let outcome = match first_missing {
        Some(path) => PrecheckOutcome::MissingFile { path, found },
        None => {
            lines.extend(instructions::render(&config.project.name));
            PrecheckOutcome::AllPresent { found }
        }
    };

    let root_display = root.to_string_lossy();
    emit_precheck_summary(&PrecheckSummary {
        project_root: root_display.as_ref(),
        expected: config.expected_files.len(),
        found: outcome.found().len(),
        status: outcome.status(),
        first_missing: outcome.first_missing(),
    });

    Ok(PrecheckReport { lines, outcome })
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};

    use tempfile::tempdir;

    use crate::lib::errors::PrecheckError;
    use crate::precheck::config::ProjectSection;

    use super::*;

    fn config_for(root: &Path, expected: &[&str]) -> PrecheckConfig {
        PrecheckConfig {
            project: ProjectSection {
                root: root.to_path_buf(),
                name: "ExampleApp".to_string(),
            },
            expected_files: expected.iter().map(|entry| entry.to_string()).collect(),
            source_path: None,
        }
    }

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("can create parent directories");
        }
        fs::write(path, b"// source").expect("can write source file");
    }

    #[test]
    fn all_present_reports_every_file_in_order_then_instructions() {
        let temp = tempdir().expect("can create temp directory");
        touch(temp.path(), "Sources/App/Main.swift");
        touch(temp.path(), "Sources/App/Scene.swift");

        let config = config_for(
            temp.path(),
            &["Sources/App/Main.swift", "Sources/App/Scene.swift"],
        );
        let report = run_precheck(&config).expect("scan should run");

        assert!(report.outcome.is_success());
        assert_eq!(report.lines[0], START_BANNER);
        assert_eq!(report.lines[1], "✓ Found: Sources/App/Main.swift");
        assert_eq!(report.lines[2], "✓ Found: Sources/App/Scene.swift");
        assert_eq!(report.lines[3], "");
        assert_eq!(report.lines[4], instructions::SUMMARY_LINE);
        assert!(report
            .lines
            .iter()
            .any(|line| line.contains("'Add Files to ExampleApp...'")));
    }

    #[test]
    fn first_missing_entry_stops_the_scan() {
        let temp = tempdir().expect("can create temp directory");
        touch(temp.path(), "A.swift");
        touch(temp.path(), "B.swift");
        // C.swift and D.swift intentionally absent.

        let config = config_for(temp.path(), &["A.swift", "B.swift", "C.swift", "D.swift"]);
        let report = run_precheck(&config).expect("scan should run");

        assert_eq!(
            report.lines,
            vec![
                START_BANNER.to_string(),
                "✓ Found: A.swift".to_string(),
                "✓ Found: B.swift".to_string(),
                "✗ Missing: C.swift".to_string(),
            ]
        );
        assert_eq!(
            report.outcome,
            PrecheckOutcome::MissingFile {
                path: "C.swift".to_string(),
                found: vec!["A.swift".to_string(), "B.swift".to_string()],
            }
        );
        assert!(!report.render().contains("D.swift"));
        assert!(!report.render().contains(instructions::SUMMARY_LINE));
    }

    #[test]
    fn empty_expected_list_succeeds_vacuously() {
        let temp = tempdir().expect("can create temp directory");

        let config = config_for(temp.path(), &[]);
        let report = run_precheck(&config).expect("scan should run");

        assert!(report.outcome.is_success());
        assert_eq!(report.outcome.found(), &[] as &[String]);
        assert_eq!(report.lines[0], START_BANNER);
        assert_eq!(report.lines[1], "");
        assert_eq!(report.lines[2], instructions::SUMMARY_LINE);
    }

    #[test]
    fn repeated_runs_produce_identical_reports() {
        let temp = tempdir().expect("can create temp directory");
        touch(temp.path(), "A.swift");

        let config = config_for(temp.path(), &["A.swift", "B.swift"]);
        let first = run_precheck(&config).expect("first scan should run");
        let second = run_precheck(&config).expect("second scan should run");

        assert_eq!(first, second);
    }

    #[test]
    fn reordering_the_list_changes_which_gap_is_reported_first() {
        let temp = tempdir().expect("can create temp directory");
        touch(temp.path(), "A.swift");
        // B.swift and C.swift absent.

        let forward = config_for(temp.path(), &["A.swift", "B.swift", "C.swift"]);
        let reversed = config_for(temp.path(), &["C.swift", "B.swift", "A.swift"]);

        let forward_report = run_precheck(&forward).expect("scan should run");
        let reversed_report = run_precheck(&reversed).expect("scan should run");

        assert_eq!(forward_report.outcome.first_missing(), Some("B.swift"));
        assert_eq!(reversed_report.outcome.first_missing(), Some("C.swift"));
        assert!(!forward_report.outcome.is_success());
        assert!(!reversed_report.outcome.is_success());
    }

    #[test]
    fn directories_count_as_present_entries() {
        let temp = tempdir().expect("can create temp directory");
        fs::create_dir_all(temp.path().join("Sources/App")).expect("can create directory");

        let config = config_for(temp.path(), &["Sources/App"]);
        let report = run_precheck(&config).expect("scan should run");

        assert!(report.outcome.is_success());
        assert_eq!(report.lines[1], "✓ Found: Sources/App");
    }

    #[test]
    fn unavailable_project_root_is_an_error_not_a_missing_file() {
        let temp = tempdir().expect("can create temp directory");
        let ghost_root = temp.path().join("no-such-project");

        let config = config_for(&ghost_root, &["A.swift"]);
        let error = run_precheck(&config).expect_err("nonexistent root must fail the run");

        let PrecheckError::ProjectRootUnavailable { path, .. } = error;
        assert_eq!(path, PathBuf::from(&ghost_root));
    }
}
