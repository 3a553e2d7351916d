//! Discovery of example artifacts: the depth-bounded scan that pairs
//! `<name><marker>` templates with their real counterparts.
//!
//! # Traversal
//!
//! [`find_files`] walks the tree depth-first in pre-order, starting at the
//! root (depth 0). Entries within a directory are visited in the order the
//! filesystem enumerates them — not necessarily lexicographic. A subdirectory
//! is entered the moment it is encountered, so its results land between its
//! siblings' results, exactly where the directory itself appeared.
//!
//! The depth bound counts directory-descent steps: the walk into a directory
//! at depth `max_depth + 1` returns immediately, so files at depth
//! `max_depth` are still reported and files one level deeper are not. With
//! `max_depth == 0` only the root's direct children are scanned.
//!
//! # Matching
//!
//! A regular file matches when its name ends with the marker suffix; the
//! returned path is the absolute path with the suffix stripped. Everything
//! else — non-matching files, broken symlinks, directories beyond the depth
//! bound — is skipped silently. A file whose name is nothing *but* the
//! marker would strip to an empty name and is skipped too.
//!
//! [`find_dirs`] is the non-recursive analogue for example *directories*:
//! only direct children of the root are considered.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ConftreeError;

/// Recursively find example files under `root` and return their real-artifact
/// paths (marker suffix stripped), in pre-order traversal order.
///
/// Fails with [`ConftreeError::NotFound`] if `root` does not exist or is not
/// a directory.
pub fn find_files(
    root: &Path,
    marker: &str,
    max_depth: usize,
) -> Result<Vec<PathBuf>, ConftreeError> {
    walk(root, marker, max_depth, 0)
}

fn walk(
    dir: &Path,
    marker: &str,
    max_depth: usize,
    depth: usize,
) -> Result<Vec<PathBuf>, ConftreeError> {
    if depth > max_depth {
        return Ok(Vec::new());
    }
    debug!(dir = %dir.display(), depth, "scanning");

    let mut found = Vec::new();
    let entries = fs::read_dir(dir).map_err(|e| ConftreeError::from_io(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| ConftreeError::from_io(dir, e))?;
        let path = entry.path();

        if path.is_dir() {
            found.extend(walk(&path, marker, max_depth, depth + 1)?);
        } else if path.is_file()
            && let Some(real) = strip_marker(&path, marker)
        {
            found.push(real);
        }
    }
    Ok(found)
}

/// Find example directories among the direct children of `root` and return
/// their real-directory paths (marker suffix stripped). Non-recursive.
pub fn find_dirs(root: &Path, marker: &str) -> Result<Vec<PathBuf>, ConftreeError> {
    let mut found = Vec::new();
    let entries = fs::read_dir(root).map_err(|e| ConftreeError::from_io(root, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| ConftreeError::from_io(root, e))?;
        let path = entry.path();
        if path.is_dir()
            && let Some(real) = strip_marker(&path, marker)
        {
            found.push(real);
        }
    }
    Ok(found)
}

/// Filter `find_files` down to real paths absent from disk, order preserved.
pub fn find_missing_files(
    root: &Path,
    marker: &str,
    max_depth: usize,
) -> Result<Vec<PathBuf>, ConftreeError> {
    let mut files = find_files(root, marker, max_depth)?;
    files.retain(|p| !p.exists());
    Ok(files)
}

/// Filter `find_dirs` down to real paths that are not directories on disk.
pub fn find_missing_dirs(root: &Path, marker: &str) -> Result<Vec<PathBuf>, ConftreeError> {
    let mut dirs = find_dirs(root, marker)?;
    dirs.retain(|p| !p.is_dir());
    Ok(dirs)
}

/// If the file name of `path` ends with `marker`, return the path with the
/// suffix stripped. `None` for non-matches, non-UTF-8 names, and names that
/// consist of nothing but the marker.
fn strip_marker(path: &Path, marker: &str) -> Option<PathBuf> {
    let name = path.file_name()?.to_str()?;
    let stem = name.strip_suffix(marker)?;
    if stem.is_empty() {
        return None;
    }
    Some(path.with_file_name(stem))
}

/// The example path for a real-artifact path: the marker appended verbatim.
pub(crate) fn example_path(real: &Path, marker: &str) -> PathBuf {
    let mut os = real.as_os_str().to_os_string();
    os.push(marker);
    PathBuf::from(os)
}
