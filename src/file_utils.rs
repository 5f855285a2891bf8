// src/file_utils.rs

use crate::error::PickerError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lists the recordings directly inside `folder_path`.
/// Only regular files whose extension is in `extensions` are returned
/// (case-insensitive, a leading dot in the configured extension is ignored).
/// Subdirectories are not entered. The result is sorted by path.
///
/// # Errors
///
/// Returns `DirectoryNotFound` if `folder_path` is missing or not a directory,
/// and `Scan` if reading the directory fails.
pub fn find_recordings(
    folder_path: &Path,
    extensions: &[String],
) -> Result<Vec<PathBuf>, PickerError> {
    if !folder_path.is_dir() {
        return Err(PickerError::DirectoryNotFound(folder_path.to_path_buf()));
    }

    let wanted: Vec<String> = extensions
        .iter()
        .map(|e| e.trim_start_matches('.').to_lowercase())
        .collect();

    let mut recordings = Vec::new();
    for entry_result in WalkDir::new(folder_path).min_depth(1).max_depth(1) {
        let entry = entry_result?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            if wanted.contains(&ext.to_lowercase()) {
                recordings.push(path.to_path_buf());
            }
        }
    }
    recordings.sort();

    log::debug!(
        "Found {} recording(s) in '{}'",
        recordings.len(),
        folder_path.display()
    );
    Ok(recordings)
}
