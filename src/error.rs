use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConftreeError {
    #[error("Not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Path {path} is not under config root {root}")]
    OutsideRoot { path: PathBuf, root: PathBuf },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("Failed to access {path}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("No '{env}' section in {path}")]
    MissingEnv { env: String, path: PathBuf },
}

impl ConftreeError {
    /// Annotate an io error with the path it came from.
    ///
    /// `NotFound` and `NotADirectory` collapse into [`ConftreeError::NotFound`]:
    /// a root that is actually a file fails the same way as one that is absent.
    pub(crate) fn from_io(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::NotADirectory => ConftreeError::NotFound {
                path: path.to_path_buf(),
            },
            io::ErrorKind::PermissionDenied => ConftreeError::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => ConftreeError::Io {
                path: path.to_path_buf(),
                source,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_formats_path() {
        let err = ConftreeError::NotFound {
            path: "/app/config/foo.yml".into(),
        };
        assert!(err.to_string().contains("foo.yml"));
    }

    #[test]
    fn outside_root_names_both_paths() {
        let err = ConftreeError::OutsideRoot {
            path: "/etc/passwd".into(),
            root: "/app/config".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/etc/passwd"));
        assert!(msg.contains("/app/config"));
    }

    #[test]
    fn io_not_found_maps_to_not_found() {
        let io = io::Error::new(io::ErrorKind::NotFound, "gone");
        let err = ConftreeError::from_io(Path::new("/x"), io);
        assert!(matches!(err, ConftreeError::NotFound { .. }));
    }

    #[test]
    fn io_permission_maps_to_permission_denied() {
        let io = io::Error::new(io::ErrorKind::PermissionDenied, "nope");
        let err = ConftreeError::from_io(Path::new("/x"), io);
        assert!(matches!(err, ConftreeError::PermissionDenied { .. }));
    }

    #[test]
    fn other_io_kinds_stay_io() {
        let io = io::Error::new(io::ErrorKind::TimedOut, "slow");
        let err = ConftreeError::from_io(Path::new("/x"), io);
        assert!(matches!(err, ConftreeError::Io { .. }));
    }

    #[test]
    fn missing_env_names_section() {
        let err = ConftreeError::MissingEnv {
            env: "staging".into(),
            path: "/app/config/db.yml".into(),
        };
        assert!(err.to_string().contains("staging"));
    }
}
