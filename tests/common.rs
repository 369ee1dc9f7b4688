//! Shared test utilities for integration tests.
//!
//! Provides a temporary chapters/rendered directory pair and helpers for
//! populating and inspecting it.

#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary source and destination directories.
pub struct Workspace {
    pub root: TempDir,
    pub source: PathBuf,
    pub dest: PathBuf,
}

/// Creates temporary workspace with empty `chapters` and `rendered` dirs.
///
/// # Errors
///
/// Returns error if directory creation fails
pub fn create_workspace() -> Result<Workspace> {
    let root = TempDir::new()?;
    let source = root.path().join("chapters");
    let dest = root.path().join("rendered");
    fs::create_dir(&source)?;
    fs::create_dir(&dest)?;

    Ok(Workspace { root, source, dest })
}

/// Writes file under `dir`, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(dir: &Path, path: &str, content: impl AsRef<[u8]>) -> Result<()> {
    let file_path = dir.join(path);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

/// Returns sorted entry names directly under `dir`.
///
/// # Errors
///
/// Returns error if the directory cannot be listed
pub fn dir_names(dir: &Path) -> Result<Vec<String>> {
    let mut names = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect::<std::io::Result<Vec<_>>>()?;
    names.sort();
    Ok(names)
}
