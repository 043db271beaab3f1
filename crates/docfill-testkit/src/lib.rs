//! Test utilities for docfill
//!
//! Scratch directories and fixture files shared by the docfill test suites.

pub mod fixtures;

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Fresh temp dir under `.tmp/` in the current directory
///
/// Integration tests run from the crate directory, so every scratch
/// template and rendered document stays next to the crate in a single
/// ignored folder. The directory is removed when the guard drops.
///
/// # Panics
///
/// Panics when `.tmp/` or the temp dir inside it cannot be created.
///
/// # Examples
///
/// ```rust
/// use docfill_testkit::temp_dir_in_workspace;
///
/// let scratch = temp_dir_in_workspace();
/// std::fs::write(scratch.path().join("template.txt"), "Hello {{ name }}").unwrap();
/// assert!(scratch.path().join("template.txt").is_file());
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    try_temp_dir_in_workspace().expect("could not create a temp dir under .tmp/")
}

/// Fallible form of [`temp_dir_in_workspace`]
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let base = std::env::current_dir()?.join(".tmp");
    std::fs::create_dir_all(&base)?;
    tempfile::Builder::new().prefix("docfill-").tempdir_in(&base)
}

/// Write `content` to `dir/name`, creating parent directories
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(&path, content).expect("Failed to write fixture file");
    path
}

/// Copy the bundled templates into `dir` under their default names
///
/// Returns the paths of (`template.txt`, `mact_template.txt`).
pub fn install_default_templates(dir: &Path) -> (PathBuf, PathBuf) {
    (
        write_file(dir, "template.txt", fixtures::GENERIC_TEMPLATE),
        write_file(dir, "mact_template.txt", fixtures::JUDGMENT_TEMPLATE),
    )
}
