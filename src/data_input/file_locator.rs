// src/data_input/file_locator.rs

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::debug;

use crate::error::LogError;

/// Returns the most recently modified file in `dir` with the given extension
/// (compared case-insensitively, without the dot).
/// Files with identical modification times are ordered by name and the last one wins.
///
/// # Errors
/// * `DirectoryNotFound` if `dir` is missing or not a directory.
/// * `NoInputFiles` if no regular file with the extension exists.
pub fn find_latest_log(dir: &Path, extension: &str) -> Result<PathBuf, LogError> {
    if !dir.is_dir() {
        return Err(LogError::DirectoryNotFound(dir.to_path_buf()));
    }

    let entries = fs::read_dir(dir).map_err(|e| LogError::io(dir, e))?;
    let mut latest: Option<(SystemTime, PathBuf)> = None;

    for entry in entries {
        let entry = entry.map_err(|e| LogError::io(dir, e))?;
        let path = entry.path();
        let matches_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
        if !matches_extension {
            continue;
        }

        // fs::metadata follows symlinks, so a linked log counts as a file.
        // Dangling links have no target metadata and are skipped.
        let Ok(metadata) = fs::metadata(&path) else {
            debug!("Skipping unreadable entry {:?}", path);
            continue;
        };
        if !metadata.is_file() {
            continue;
        }
        let modified = metadata.modified().map_err(|e| LogError::io(&path, e))?;
        debug!("Candidate log {:?} modified {:?}", path, modified);

        let is_newer = match &latest {
            None => true,
            Some((best_time, best_path)) => (modified, &path) >= (*best_time, best_path),
        };
        if is_newer {
            latest = Some((modified, path));
        }
    }

    latest
        .map(|(_, path)| path)
        .ok_or_else(|| LogError::NoInputFiles(dir.to_path_buf()))
}

/// Creates (if needed) the chart directory `subdir` next to `input_file` and returns its path.
pub fn ensure_output_dir(input_file: &Path, subdir: &str) -> Result<PathBuf, LogError> {
    let parent = input_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let out_dir = parent.join(subdir);
    fs::create_dir_all(&out_dir).map_err(|e| LogError::io(&out_dir, e))?;
    Ok(out_dir)
}

// src/data_input/file_locator.rs
