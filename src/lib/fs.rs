//! Filesystem probes backing the pre-flight check.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::lib::errors::PrecheckError;

/// Existence status for a single expected entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    Present,
    Missing,
}

/// Result of probing one expected entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// Path as listed in the configuration, relative to the project root.
    pub relative: String,
    /// Fully resolved path that was tested.
    pub resolved: PathBuf,
    pub status: EntryStatus,
}

impl CheckResult {
    pub fn is_present(&self) -> bool {
        matches!(self.status, EntryStatus::Present)
    }
}

/// Canonicalize the project root.
///
/// A nonexistent or unreadable root is an environmental failure, not a
/// "missing file" outcome; the underlying `io::Error` is preserved as the
/// error source without retry or recovery.
pub fn resolve_project_root(root: &Path) -> Result<PathBuf, PrecheckError> {
    fs::canonicalize(root).map_err(|source| PrecheckError::ProjectRootUnavailable {
        path: root.to_path_buf(),
        source,
    })
}

/// Probe a single expected entry under the project root.
///
/// Existence only: files and directories both count, content and type are
/// never inspected. A broken symlink counts as missing.
pub fn probe_expected_entry(root: &Path, relative: &str) -> CheckResult {
    let resolved = root.join(relative);
    let status = if resolved.exists() {
        EntryStatus::Present
    } else {
        EntryStatus::Missing
    };
    CheckResult {
        relative: relative.to_string(),
        resolved,
        status,
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn probe_reports_present_for_files_and_directories() {
        let temp = tempdir().expect("can create temp directory");
        let sources = temp.path().join("Sources");
        fs::create_dir_all(&sources).expect("can create sources directory");
        fs::write(sources.join("Main.swift"), b"// main").expect("can write source file");

        let file = probe_expected_entry(temp.path(), "Sources/Main.swift");
        assert_eq!(file.status, EntryStatus::Present);
        assert!(file.is_present());
        assert_eq!(file.relative, "Sources/Main.swift");
        assert_eq!(file.resolved, temp.path().join("Sources/Main.swift"));

        let dir = probe_expected_entry(temp.path(), "Sources");
        assert_eq!(dir.status, EntryStatus::Present);
    }

    #[test]
    fn probe_reports_missing_for_absent_entries() {
        let temp = tempdir().expect("can create temp directory");

        let result = probe_expected_entry(temp.path(), "Sources/Ghost.swift");

        assert_eq!(result.status, EntryStatus::Missing);
        assert!(!result.is_present());
    }

    #[test]
    fn resolve_project_root_fails_for_nonexistent_directory() {
        let temp = tempdir().expect("can create temp directory");
        let missing_root = temp.path().join("no-such-project");

        let error = resolve_project_root(&missing_root)
            .expect_err("nonexistent root must be an environmental failure");

        let PrecheckError::ProjectRootUnavailable { path, .. } = error;
        assert_eq!(path, missing_root);
    }

    #[test]
    fn resolve_project_root_canonicalizes_existing_directory() {
        let temp = tempdir().expect("can create temp directory");

        let resolved = resolve_project_root(temp.path()).expect("existing root resolves");

        assert!(resolved.is_absolute());
        assert!(resolved.is_dir());
    }
}
