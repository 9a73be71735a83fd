//! Input discovery.
//!
//! The dashboard is normally pointed at one export file, but pointing it
//! at a folder also works: the first CSV by filename is used, mirroring
//! the "use the obvious sheet" behavior analysts expect.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// Lists CSV files in a directory, sorted by filename.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|source| IngestError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| IngestError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if is_csv {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Resolves the input argument to a concrete CSV file.
///
/// A file path passes through untouched; a directory resolves to its
/// first CSV by name.
pub fn discover_input(path: &Path) -> Result<PathBuf> {
    if path.is_file() {
        return Ok(path.to_path_buf());
    }
    if path.is_dir() {
        let files = list_csv_files(path)?;
        return files
            .into_iter()
            .next()
            .ok_or_else(|| IngestError::NoCsvInput {
                path: path.to_path_buf(),
            });
    }
    Err(IngestError::InputNotFound {
        path: path.to_path_buf(),
    })
}
