//! Keep filled-in secrets out of version control.

use std::path::Path;

use tracing::debug;

use crate::error::Result;

/// Append any missing `entries` to `dir/.gitignore`.
///
/// Existing lines are preserved and the file is left untouched when every
/// entry is already present. Returns the entries that were added.
pub fn ensure_gitignore(dir: &Path, entries: &[&str]) -> Result<Vec<String>> {
    let gitignore = dir.join(".gitignore");

    let existing = if gitignore.exists() {
        std::fs::read_to_string(&gitignore)?
    } else {
        String::new()
    };

    let mut updated = existing.clone();
    let mut added = Vec::new();
    for entry in entries {
        if !existing.lines().any(|l| l.trim() == *entry) {
            if !updated.is_empty() && !updated.ends_with('\n') {
                updated.push('\n');
            }
            updated.push_str(entry);
            updated.push('\n');
            added.push(entry.to_string());
        }
    }

    if updated != existing {
        debug!(added = added.len(), "updating .gitignore");
        std::fs::write(&gitignore, updated)?;
    }

    Ok(added)
}
