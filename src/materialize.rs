//! Materialization: creating missing real artifacts from their examples.
//!
//! Creation is idempotent by design. The missing set is computed first, and
//! existence is re-checked immediately before each copy so a file created by
//! a concurrent racer is left alone. The remaining check-then-copy window is
//! accepted: both racers copy from the same example, so the outcome is
//! identical regardless of who wins.
//!
//! Copy notices go to an injected [`CopyNotice`] sink rather than a global
//! formatter. [`Silent`] discards them; [`LabelNotice`] writes the classic
//! right-aligned `copy` label followed by the source path to any writer.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::discover::{self, example_path};
use crate::error::ConftreeError;

/// Sink for one-line notices emitted as examples are copied.
pub trait CopyNotice {
    /// Called once per performed copy with the example (source) path.
    fn copied(&mut self, example: &Path);
}

/// Discards all notices. The non-verbose default.
pub struct Silent;

impl CopyNotice for Silent {
    fn copied(&mut self, _example: &Path) {}
}

/// Writes `        copy  <source>` per copy, label right-aligned to 12
/// columns, to the wrapped writer. Write failures are ignored; notices are
/// not part of the functional contract.
pub struct LabelNotice<W: Write>(pub W);

impl<W: Write> CopyNotice for LabelNotice<W> {
    fn copied(&mut self, example: &Path) {
        let _ = writeln!(self.0, "{:>12}  {}", "copy", example.display());
    }
}

/// Copy every missing example file under `root` to its real path.
///
/// Returns the real paths actually created. Already-existing files are
/// skipped silently, so a second call right after a first is a no-op.
pub fn materialize_missing_files(
    root: &Path,
    marker: &str,
    max_depth: usize,
    notice: &mut dyn CopyNotice,
) -> Result<Vec<PathBuf>, ConftreeError> {
    let missing = discover::find_missing_files(root, marker, max_depth)?;
    let mut created = Vec::new();
    for real in missing {
        if real.exists() {
            continue;
        }
        let example = example_path(&real, marker);
        fs::copy(&example, &real).map_err(|e| ConftreeError::from_io(&example, e))?;
        debug!(example = %example.display(), real = %real.display(), "copied file");
        notice.copied(&example);
        created.push(real);
    }
    Ok(created)
}

/// Copy every missing example directory (direct children of `root` only) to
/// its real path, subtree included.
pub fn materialize_missing_dirs(
    root: &Path,
    marker: &str,
    notice: &mut dyn CopyNotice,
) -> Result<Vec<PathBuf>, ConftreeError> {
    let missing = discover::find_missing_dirs(root, marker)?;
    let mut created = Vec::new();
    for real in missing {
        if real.is_dir() {
            continue;
        }
        let example = example_path(&real, marker);
        copy_dir_all(&example, &real)?;
        debug!(example = %example.display(), real = %real.display(), "copied directory");
        notice.copied(&example);
        created.push(real);
    }
    Ok(created)
}

/// Recursive directory copy. Files are copied byte-for-byte; nested
/// directories are recreated. Symlinks and other special entries are skipped.
fn copy_dir_all(src: &Path, dst: &Path) -> Result<(), ConftreeError> {
    fs::create_dir_all(dst).map_err(|e| ConftreeError::from_io(dst, e))?;
    let entries = fs::read_dir(src).map_err(|e| ConftreeError::from_io(src, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| ConftreeError::from_io(src, e))?;
        let from = entry.path();
        let to = dst.join(entry.file_name());
        if from.is_dir() {
            copy_dir_all(&from, &to)?;
        } else if from.is_file() {
            fs::copy(&from, &to).map_err(|e| ConftreeError::from_io(&from, e))?;
        }
    }
    Ok(())
}
