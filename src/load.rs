//! Loading actual config content: raw text, rendered text, and env-scoped
//! YAML documents.
//!
//! YAML files are expected to be keyed by environment name at the top level:
//!
//! ```yaml
//! development:
//!   url: postgres://localhost/dev
//! production:
//!   url: ${DATABASE_URL}
//! ```
//!
//! [`load_yaml`] renders `${VAR}` placeholders first, parses, then selects
//! the section for the requested environment. [`load_yaml_doc`] skips the
//! selection and returns the whole document.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::ConftreeError;
use crate::expand;

/// Read a file as UTF-8 text, without rendering.
pub fn load_file(path: &Path) -> Result<String, ConftreeError> {
    fs::read_to_string(path).map_err(|e| ConftreeError::from_io(path, e))
}

/// Read a file and expand `${VAR}` placeholders from the process environment.
pub fn load_rendered(path: &Path) -> Result<String, ConftreeError> {
    Ok(expand::expand_env(&load_file(path)?))
}

/// Read, render, and parse a YAML file; return the whole document.
pub fn load_yaml_doc(path: &Path) -> Result<serde_yaml::Value, ConftreeError> {
    let text = load_rendered(path)?;
    serde_yaml::from_str(&text).map_err(|e| ConftreeError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Read, render, and parse a YAML file; return the section keyed by `env`.
///
/// Fails with [`ConftreeError::MissingEnv`] if the document has no mapping
/// entry for `env`.
pub fn load_yaml(path: &Path, env: &str) -> Result<serde_yaml::Value, ConftreeError> {
    let doc = load_yaml_doc(path)?;
    doc.get(env).cloned().ok_or_else(|| ConftreeError::MissingEnv {
        env: env.to_string(),
        path: path.to_path_buf(),
    })
}

/// Like [`load_yaml`], deserializing the env section into `T`.
pub fn load_yaml_as<T: DeserializeOwned>(path: &Path, env: &str) -> Result<T, ConftreeError> {
    let section = load_yaml(path, env)?;
    serde_yaml::from_value(section).map_err(|e| ConftreeError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}
