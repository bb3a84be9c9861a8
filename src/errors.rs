use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, BackupError>;

/// Failure kinds for a backup run.
///
/// `Config` failures are anticipated and handled gracefully by the binary
/// (the operator has to fix the config file). `Filesystem` and `ObjectStore`
/// failures abort the run: sources uploaded before the failure stay
/// uploaded, sources after it are never attempted.
#[derive(Debug, Error)]
pub enum BackupError {
    /// Missing, unparsable or incomplete configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// A directory or file could not be read during traversal or archiving.
    #[error("filesystem error on {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The object store client failed or an upload was rejected.
    #[error("object storage error: {0}")]
    ObjectStore(String),
}

impl BackupError {
    pub fn filesystem(path: impl Into<PathBuf>, source: io::Error) -> Self {
        BackupError::Filesystem {
            path: path.into(),
            source,
        }
    }
}

impl From<walkdir::Error> for BackupError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(Path::to_path_buf).unwrap_or_default();
        BackupError::Filesystem {
            path,
            source: err.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filesystem_error_display_includes_path() {
        let err = BackupError::filesystem(
            "/data/alpha",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let message = err.to_string();
        assert!(message.contains("/data/alpha"), "got: {}", message);
        assert!(message.contains("denied"), "got: {}", message);
    }

    #[test]
    fn test_config_error_display() {
        let err = BackupError::Config("minio.bucket must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "configuration error: minio.bucket must not be empty"
        );
    }
}
