//! Source directory listing.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::document::is_markdown_name;

/// Lists markdown files directly under `dir`.
///
/// Keeps every non-directory entry whose name ends in `.md`. The listing is
/// not recursive and not sorted: names come back in whatever order the
/// filesystem yields them.
///
/// # Arguments
///
/// * `dir`: Source directory to scan
///
/// # Returns
///
/// Candidate filenames, relative to `dir`
///
/// # Errors
///
/// Returns error if the directory cannot be opened. Failures on individual
/// entries are logged and the entry skipped.
pub fn list_candidates(dir: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to list source directory {}", dir.display()))?;

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };

        let is_dir = match entry.file_type() {
            Ok(file_type) => file_type.is_dir(),
            Err(e) => {
                warn!("Skipping {}: {}", entry.path().display(), e);
                continue;
            }
        };
        if is_dir {
            continue;
        }

        let Some(name) = entry.file_name().to_str().map(String::from) else {
            debug!("Skipping non UTF8 name {:?}", entry.file_name());
            continue;
        };

        if is_markdown_name(&name) {
            candidates.push(name);
        }
    }

    debug!(count = candidates.len(), dir = %dir.display(), "listed candidates");
    Ok(candidates)
}
