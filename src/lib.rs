//! Manage config files that ship with versioned example templates.
//!
//! Many applications keep their real config out of version control and commit
//! a template next to it instead: `database.yml.example` is tracked,
//! `database.yml` is ignored. Conftree automates the lifecycle around that
//! convention: find the templates, tell you which real files are missing, and
//! create them by copying.
//!
//! ```no_run
//! use conftree::ConfTree;
//!
//! # fn main() -> Result<(), conftree::ConftreeError> {
//! let tree = ConfTree::new("/app/config").with_env("production");
//!
//! // What would a fresh checkout be missing?
//! for path in tree.find_missing_files()? {
//!     println!("missing: {}", path.display());
//! }
//!
//! // Create them from the committed examples.
//! tree.materialize_missing_files()?;
//!
//! // Load the production section of an env-keyed YAML file.
//! let db = tree.load_yaml("database.yml")?;
//! # Ok(())
//! # }
//! ```
//!
//! # The example convention
//!
//! An *example artifact* is any file or directory named
//! `<realname><marker>`, where the marker defaults to `.example` and is
//! configurable per handle or per call. Its *real artifact* is the same path
//! with the marker stripped. Discovery pairs the two: every result of
//! [`find_files`](ConfTree::find_files) is a real path derived from exactly
//! one example found on disk.
//!
//! # Discovery
//!
//! File discovery is a depth-first pre-order scan from the root, bounded by
//! a configurable depth limit (default 5, where 0 means the root directory
//! only). Within a directory, entries come back in filesystem enumeration
//! order. Directory discovery ([`find_dirs`](ConfTree::find_dirs)) is
//! deliberately non-recursive: example directories live at the top of the
//! config root.
//!
//! # Materialization
//!
//! [`materialize_missing_files`](ConfTree::materialize_missing_files) copies
//! each missing file's example to its real path, byte for byte. The
//! operation is idempotent — existing files are never touched, and a second
//! run performs zero copies. Directory materialization copies the whole
//! subtree. Per-copy notices go to a caller-supplied
//! [`CopyNotice`] sink; the library never prints on its own.
//!
//! # Loading
//!
//! The loading layer reads real config content: raw text
//! ([`load_file`](ConfTree::load_file)), text with `${VAR}` environment
//! substitution ([`load_rendered`](ConfTree::load_rendered)), and YAML
//! documents keyed by environment name at the top level
//! ([`load_yaml`](ConfTree::load_yaml), typed via
//! [`load_yaml_as`](ConfTree::load_yaml_as)).
//!
//! # Errors
//!
//! All fallible operations return [`ConftreeError`]. Filesystem errors
//! surface immediately with the path attached; there is no retry or
//! recovery. The single designed no-op is the already-exists skip during
//! materialization. Deletion is the deliberate asymmetry: removing a file
//! that does not exist is an error, not a no-op.

pub mod error;

mod discover;
mod expand;
mod load;
mod materialize;
mod tree;

#[cfg(test)]
mod fixtures;

pub use error::ConftreeError;
pub use expand::{expand_env, expand_vars};
pub use materialize::{CopyNotice, LabelNotice, Silent};
pub use tree::{ConfTree, DEFAULT_ENV, DEFAULT_MARKER, DEFAULT_MAX_DEPTH};
