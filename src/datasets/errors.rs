use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SplitError {
    #[error("directory not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("no images with an accepted extension in {}", path.display())]
    Empty { path: PathBuf },

    #[error("permission denied while trying to {op} {}: {source}", path.display())]
    PermissionDenied {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to {op} {}: {source}", path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("copy of {} to {} is not byte-identical", source_path.display(), dest_path.display())]
    VerifyMismatch {
        source_path: PathBuf,
        dest_path: PathBuf,
    },
}

impl SplitError {
    /// Classifies an io error raised while performing `op` on `path`.
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { op, path, source },
            io::ErrorKind::NotFound if op == "read directory" => Self::NotFound { path },
            _ => Self::Io { op, path, source },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_errors_are_classified() {
        let err = SplitError::io(
            "copy to",
            "/tmp/x.jpg",
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, SplitError::PermissionDenied { op: "copy to", .. }));
        assert!(err.to_string().contains("/tmp/x.jpg"));
    }

    #[test]
    fn missing_directory_is_not_found() {
        let err = SplitError::io(
            "read directory",
            "/nope",
            io::Error::from(io::ErrorKind::NotFound),
        );
        assert!(matches!(err, SplitError::NotFound { .. }));
    }

    #[test]
    fn other_errors_keep_operation() {
        let err = SplitError::io("create", "/d", io::Error::new(io::ErrorKind::Other, "disk full"));
        assert_eq!(err.to_string(), "failed to create /d: disk full");
    }
}
