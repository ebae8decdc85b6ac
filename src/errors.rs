//! Crate-wide error classification.
//!
//! Each component keeps its own error type (`FsOpError`, `CodecError`,
//! `ConfigError`) carrying the underlying cause, but they all classify into
//! the same small `ErrorKind` set so callers can branch on "missing path"
//! without caring which operation produced it.

use std::io;

/// Coarse category of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The target path, or one of its parent directories, does not exist.
    NotFound,
    /// Insufficient rights for the requested operation.
    PermissionDenied,
    /// Bytes handed to a decoder are not in the expected format.
    Format,
    /// Any other I/O failure (disk full, device error, interrupted call).
    Io,
}

impl ErrorKind {
    /// Classify a raw `io::Error`.
    ///
    /// `ENOTDIR` is folded into `NotFound`: a path whose "parent directory"
    /// is actually a regular file is as missing as one whose parent does not
    /// exist at all.
    pub fn of_io(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => ErrorKind::NotFound,
            io::ErrorKind::PermissionDenied => ErrorKind::PermissionDenied,
            io::ErrorKind::InvalidData => ErrorKind::Format,
            _ if is_not_a_directory(err) => ErrorKind::NotFound,
            _ => ErrorKind::Io,
        }
    }

    /// The matching `std::io::ErrorKind`, used when converting back into an
    /// `io::Error` for `Read`/`Write` implementors.
    pub fn to_io_kind(self) -> io::ErrorKind {
        match self {
            ErrorKind::NotFound => io::ErrorKind::NotFound,
            ErrorKind::PermissionDenied => io::ErrorKind::PermissionDenied,
            ErrorKind::Format => io::ErrorKind::InvalidData,
            ErrorKind::Io => io::ErrorKind::Other,
        }
    }
}

#[cfg(unix)]
fn is_not_a_directory(err: &io::Error) -> bool {
    err.raw_os_error() == Some(libc::ENOTDIR)
}

#[cfg(windows)]
fn is_not_a_directory(err: &io::Error) -> bool {
    // ERROR_PATH_NOT_FOUND and ERROR_DIRECTORY
    matches!(err.raw_os_error(), Some(3) | Some(267))
}

#[cfg(not(any(unix, windows)))]
fn is_not_a_directory(_err: &io::Error) -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_kinds_are_classified() {
        let nf = io::Error::from(io::ErrorKind::NotFound);
        assert_eq!(ErrorKind::of_io(&nf), ErrorKind::NotFound);

        let pd = io::Error::from(io::ErrorKind::PermissionDenied);
        assert_eq!(ErrorKind::of_io(&pd), ErrorKind::PermissionDenied);

        let other = io::Error::other("disk on fire");
        assert_eq!(ErrorKind::of_io(&other), ErrorKind::Io);
    }

    #[cfg(unix)]
    #[test]
    fn enotdir_counts_as_not_found() {
        let e = io::Error::from_raw_os_error(libc::ENOTDIR);
        assert_eq!(ErrorKind::of_io(&e), ErrorKind::NotFound);
    }

    #[test]
    fn io_kind_mapping_is_stable() {
        assert_eq!(ErrorKind::NotFound.to_io_kind(), io::ErrorKind::NotFound);
        assert_eq!(ErrorKind::Format.to_io_kind(), io::ErrorKind::InvalidData);
    }
}
