//! Source discovery and atomic write-back.

use std::collections::HashSet;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use walkdir::{DirEntry, WalkDir};

use crate::errors::AppError;

const SWIFT_EXTENSION: &str = "swift";

/// Expands the requested paths into the Swift files to process.
///
/// Files are taken as given. Directories are walked in file-name order,
/// skipping hidden directories such as `.build` and `.git`. Each file is
/// listed once, in first-seen order.
pub(crate) fn collect_swift_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>, AppError> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();
    for root in paths {
        if root.is_dir() {
            for path in walk_directory(root)? {
                if seen.insert(path.clone()) {
                    files.push(path);
                }
            }
        } else if seen.insert(root.clone()) {
            files.push(root.clone());
        }
    }
    Ok(files)
}

fn walk_directory(root: &Path) -> Result<Vec<PathBuf>, AppError> {
    let mut files = Vec::new();
    for item in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden_directory(entry))
    {
        let entry = item.map_err(|source| AppError::Walk {
            path: source
                .path()
                .map_or_else(|| root.to_path_buf(), Path::to_path_buf),
            source,
        })?;
        if entry.file_type().is_file() && is_swift_source(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn is_hidden_directory(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

fn is_swift_source(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| extension == SWIFT_EXTENSION)
}

/// Replaces the file at `path` with `contents` via a rename, so readers
/// never observe a partial write. The original permissions are kept.
pub(crate) fn write_atomically(path: &Path, contents: &str) -> io::Result<()> {
    let directory = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let permissions = fs::metadata(path)?.permissions();

    let mut file = NamedTempFile::new_in(directory)?;
    file.write_all(contents.as_bytes())?;
    file.as_file().set_permissions(permissions)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|error| error.error)?;
    Ok(())
}
