use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::errors::ErrorKind;

/// Errors produced by the path operations in `fs_op`.
///
/// The platform's different "missing" signals are normalized into
/// `NotFound`, so callers can test `is_not_found()` regardless of which
/// operation failed.
#[derive(Error, Debug)]
pub enum FsOpError {
    /// The path or one of its parent directories does not exist.
    #[error("not found: `{}`", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Insufficient permissions.
    #[error("permission denied: `{}`", path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Any other underlying IO error.
    #[error("I/O error on `{}`: {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FsOpError {
    /// Wrap `source` with the path it was raised for, picking the variant
    /// from the error's classification.
    pub fn from_io(path: impl AsRef<Path>, source: io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        match ErrorKind::of_io(&source) {
            ErrorKind::NotFound => FsOpError::NotFound { path, source },
            ErrorKind::PermissionDenied => FsOpError::PermissionDenied { path, source },
            _ => FsOpError::Io { path, source },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            FsOpError::NotFound { .. } => ErrorKind::NotFound,
            FsOpError::PermissionDenied { .. } => ErrorKind::PermissionDenied,
            FsOpError::Io { .. } => ErrorKind::Io,
        }
    }

    /// Path the failing operation was acting on.
    pub fn path(&self) -> &Path {
        match self {
            FsOpError::NotFound { path, .. }
            | FsOpError::PermissionDenied { path, .. }
            | FsOpError::Io { path, .. } => path,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    /// Borrow the underlying IO error.
    pub fn io_error(&self) -> &io::Error {
        match self {
            FsOpError::NotFound { source, .. }
            | FsOpError::PermissionDenied { source, .. }
            | FsOpError::Io { source, .. } => source,
        }
    }
}

impl From<FsOpError> for io::Error {
    fn from(e: FsOpError) -> Self {
        let kind = match e.kind() {
            // Keep the raw kind for generic failures (e.g. StorageFull).
            ErrorKind::Io => e.io_error().kind(),
            k => k.to_io_kind(),
        };
        io::Error::new(kind, e)
    }
}

/// Extension used throughout `fs_op` to attach the path to an `io::Result`.
pub(crate) trait IoResultExt<T> {
    fn at(self, path: impl AsRef<Path>) -> Result<T, FsOpError>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn at(self, path: impl AsRef<Path>) -> Result<T, FsOpError> {
        self.map_err(|e| FsOpError::from_io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_detected_and_keeps_path() {
        let err = FsOpError::from_io("/nope", io::Error::from(io::ErrorKind::NotFound));
        assert!(err.is_not_found());
        assert_eq!(err.path(), Path::new("/nope"));
        assert!(err.to_string().contains("/nope"));
    }

    #[test]
    fn converts_back_into_io_error() {
        let err = FsOpError::from_io("x", io::Error::from(io::ErrorKind::PermissionDenied));
        assert_eq!(err.kind(), ErrorKind::PermissionDenied);
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn generic_errors_fall_into_io() {
        let err = FsOpError::from_io("x", io::Error::other("boom"));
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(!err.is_not_found());
    }
}
