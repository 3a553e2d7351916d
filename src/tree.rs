//! The [`ConfTree`] handle: a config root plus the defaults every operation
//! falls back to.
//!
//! All fields are fixed at construction. The handle holds no other state —
//! every operation re-scans the filesystem — so it is cheap to clone and
//! safe to share; see the module docs of [`discover`](crate::discover) and
//! [`materialize`](crate::materialize) for the traversal and race semantics.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::discover;
use crate::error::ConftreeError;
use crate::load;
use crate::materialize::{self, CopyNotice, Silent};

/// Default example marker suffix.
pub const DEFAULT_MARKER: &str = ".example";
/// Default maximum directory-descent depth for recursive scans.
pub const DEFAULT_MAX_DEPTH: usize = 5;
/// Default environment name for YAML section selection.
pub const DEFAULT_ENV: &str = "development";

/// Manages config files under a root directory, paired with their versioned
/// `<name><marker>` example templates.
#[derive(Debug, Clone)]
pub struct ConfTree {
    root: PathBuf,
    marker: String,
    max_depth: usize,
    env: String,
}

impl ConfTree {
    /// Create a handle for the given config root with default marker
    /// (`.example`), depth limit (5), and environment (`development`).
    ///
    /// The root is not checked here; a missing root surfaces as
    /// [`ConftreeError::NotFound`] from the first scanning operation.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        ConfTree {
            root: root.into(),
            marker: DEFAULT_MARKER.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
            env: DEFAULT_ENV.to_string(),
        }
    }

    /// Replace the default example marker suffix.
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Replace the default depth limit. Depth 0 scans the root only.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Replace the default environment name.
    pub fn with_env(mut self, env: impl Into<String>) -> Self {
        self.env = env.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn env(&self) -> &str {
        &self.env
    }

    // -- Discovery ----------------------------------------------------------

    /// Real-artifact paths for every example file under the root, pre-order.
    pub fn find_files(&self) -> Result<Vec<PathBuf>, ConftreeError> {
        self.find_files_with(&self.marker)
    }

    /// [`find_files`](Self::find_files) with a per-call marker override.
    pub fn find_files_with(&self, marker: &str) -> Result<Vec<PathBuf>, ConftreeError> {
        discover::find_files(&self.root, marker, self.max_depth)
    }

    /// The subset of [`find_files`](Self::find_files) absent from disk,
    /// order preserved.
    pub fn find_missing_files(&self) -> Result<Vec<PathBuf>, ConftreeError> {
        self.find_missing_files_with(&self.marker)
    }

    pub fn find_missing_files_with(&self, marker: &str) -> Result<Vec<PathBuf>, ConftreeError> {
        discover::find_missing_files(&self.root, marker, self.max_depth)
    }

    /// Real-directory paths for example directories among the root's direct
    /// children. Non-recursive.
    pub fn find_dirs(&self) -> Result<Vec<PathBuf>, ConftreeError> {
        self.find_dirs_with(&self.marker)
    }

    pub fn find_dirs_with(&self, marker: &str) -> Result<Vec<PathBuf>, ConftreeError> {
        discover::find_dirs(&self.root, marker)
    }

    /// The subset of [`find_dirs`](Self::find_dirs) not present as
    /// directories on disk.
    pub fn find_missing_dirs(&self) -> Result<Vec<PathBuf>, ConftreeError> {
        self.find_missing_dirs_with(&self.marker)
    }

    pub fn find_missing_dirs_with(&self, marker: &str) -> Result<Vec<PathBuf>, ConftreeError> {
        discover::find_missing_dirs(&self.root, marker)
    }

    // -- Materialization ----------------------------------------------------

    /// Create every missing config file from its example. Idempotent; returns
    /// the paths actually created.
    pub fn materialize_missing_files(&self) -> Result<Vec<PathBuf>, ConftreeError> {
        self.materialize_missing_files_with(&self.marker, &mut Silent)
    }

    /// [`materialize_missing_files`](Self::materialize_missing_files) with a
    /// marker override and a notice sink for per-copy output.
    pub fn materialize_missing_files_with(
        &self,
        marker: &str,
        notice: &mut dyn CopyNotice,
    ) -> Result<Vec<PathBuf>, ConftreeError> {
        materialize::materialize_missing_files(&self.root, marker, self.max_depth, notice)
    }

    /// Create every missing config directory from its example, subtree
    /// included. Idempotent; returns the paths actually created.
    pub fn materialize_missing_dirs(&self) -> Result<Vec<PathBuf>, ConftreeError> {
        self.materialize_missing_dirs_with(&self.marker, &mut Silent)
    }

    pub fn materialize_missing_dirs_with(
        &self,
        marker: &str,
        notice: &mut dyn CopyNotice,
    ) -> Result<Vec<PathBuf>, ConftreeError> {
        materialize::materialize_missing_dirs(&self.root, marker, notice)
    }

    // -- Path conversion (no I/O) -------------------------------------------

    /// Strip the root prefix from an absolute path.
    ///
    /// Fails with [`ConftreeError::OutsideRoot`] if the path is not under
    /// the root.
    pub fn to_relative(&self, absolute: impl AsRef<Path>) -> Result<PathBuf, ConftreeError> {
        let absolute = absolute.as_ref();
        absolute
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .map_err(|_| ConftreeError::OutsideRoot {
                path: absolute.to_path_buf(),
                root: self.root.clone(),
            })
    }

    /// Join a relative path onto the root.
    pub fn to_absolute(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    /// Join any number of path segments onto the root.
    pub fn resolve<I, P>(&self, segments: I) -> PathBuf
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut path = self.root.clone();
        for segment in segments {
            path.push(segment);
        }
        path
    }

    // -- Existence and deletion ---------------------------------------------

    /// Whether the path relative to the root exists and is a regular file.
    pub fn file_exists(&self, relative: impl AsRef<Path>) -> bool {
        self.to_absolute(relative).is_file()
    }

    /// Whether the path relative to the root exists and is a directory.
    pub fn dir_exists(&self, relative: impl AsRef<Path>) -> bool {
        self.to_absolute(relative).is_dir()
    }

    /// Remove the file at the path relative to the root.
    ///
    /// Unlike materialization this is not idempotent: deleting a file that
    /// does not exist is [`ConftreeError::NotFound`].
    pub fn delete_file(&self, relative: impl AsRef<Path>) -> Result<(), ConftreeError> {
        let path = self.to_absolute(relative);
        std::fs::remove_file(&path).map_err(|e| ConftreeError::from_io(&path, e))
    }

    // -- Content loading ----------------------------------------------------

    /// Read a file relative to the root as raw text.
    pub fn load_file(&self, relative: impl AsRef<Path>) -> Result<String, ConftreeError> {
        load::load_file(&self.to_absolute(relative))
    }

    /// Read a file relative to the root and expand `${VAR}` placeholders
    /// from the process environment.
    pub fn load_rendered(&self, relative: impl AsRef<Path>) -> Result<String, ConftreeError> {
        load::load_rendered(&self.to_absolute(relative))
    }

    /// Load a rendered YAML file and return the whole document.
    pub fn load_yaml_doc(
        &self,
        relative: impl AsRef<Path>,
    ) -> Result<serde_yaml::Value, ConftreeError> {
        load::load_yaml_doc(&self.to_absolute(relative))
    }

    /// Load a rendered YAML file and return the section for the configured
    /// environment.
    pub fn load_yaml(
        &self,
        relative: impl AsRef<Path>,
    ) -> Result<serde_yaml::Value, ConftreeError> {
        self.load_yaml_for_env(relative, &self.env)
    }

    /// [`load_yaml`](Self::load_yaml) with a per-call environment override.
    pub fn load_yaml_for_env(
        &self,
        relative: impl AsRef<Path>,
        env: &str,
    ) -> Result<serde_yaml::Value, ConftreeError> {
        load::load_yaml(&self.to_absolute(relative), env)
    }

    /// Load the configured environment's section of a YAML file into `T`.
    pub fn load_yaml_as<T: DeserializeOwned>(
        &self,
        relative: impl AsRef<Path>,
    ) -> Result<T, ConftreeError> {
        load::load_yaml_as(&self.to_absolute(relative), &self.env)
    }
}
