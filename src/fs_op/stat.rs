use std::fs;
use std::io;
use std::path::Path;

/// What a single `stat` found at a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathType {
    /// Missing, or unreachable for any reason.
    NotFound,
    Directory,
    File,
    /// Sockets, FIFOs, device nodes.
    Other,
}

impl PathType {
    /// Stat `path` once, following symlinks. Never fails: anything other
    /// than a successful stat reads as `NotFound`, with unexpected errors
    /// logged at debug level.
    pub fn of<P: AsRef<Path>>(path: P) -> Self {
        let p = path.as_ref();
        match fs::metadata(p) {
            Ok(md) if md.is_dir() => PathType::Directory,
            Ok(md) if md.is_file() => PathType::File,
            Ok(_) => PathType::Other,
            Err(e) if e.kind() == io::ErrorKind::NotFound => PathType::NotFound,
            Err(e) => {
                tracing::debug!("stat {} failed, treating as missing: {}", p.display(), e);
                PathType::NotFound
            }
        }
    }
}

/// Whether anything at all is at `path`.
pub fn exists<P: AsRef<Path>>(path: P) -> bool {
    PathType::of(path) != PathType::NotFound
}

pub fn is_dir<P: AsRef<Path>>(path: P) -> bool {
    PathType::of(path) == PathType::Directory
}

pub fn is_file<P: AsRef<Path>>(path: P) -> bool {
    PathType::of(path) == PathType::File
}
