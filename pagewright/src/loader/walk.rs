//! Single-level directory listing

use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::error::{LoadError, Phase};

/// Entries directly inside `dir`, sorted by file name
///
/// Symlinks are followed so a linked file or directory counts as its target.
pub(crate) fn entries(phase: Phase, dir: &Path) -> Result<Vec<DirEntry>, LoadError> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| LoadError::ReadDir {
            phase,
            path: dir.to_path_buf(),
            source,
        })
}

/// Regular `*.html` files directly inside `dir`, sorted by file name
///
/// A missing directory yields no files.
pub(crate) fn html_files(phase: Phase, dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    Ok(entries(phase, dir)?
        .into_iter()
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "html"))
        .map(DirEntry::into_path)
        .collect())
}
