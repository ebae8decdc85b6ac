use std::fs;
use std::io;
use std::path::Path;

use crate::fs_op::error::{FsOpError, IoResultExt};

/// Remove a single file or an empty directory at `path`.
///
/// Unlike `remove_all`, a missing path is an error (`FsOpError::NotFound`)
/// and a non-empty directory is left in place with an `Io` error.
pub fn remove(path: impl AsRef<Path>) -> Result<(), FsOpError> {
    let p = path.as_ref();
    let md = fs::symlink_metadata(p).at(p)?;
    if md.is_dir() {
        fs::remove_dir(p).at(p)?;
    } else {
        fs::remove_file(p).at(p)?;
    }
    tracing::debug!("removed {}", p.display());
    Ok(())
}

/// Remove a file or a whole directory tree at `path`.
///
/// If the path does not exist this returns `Ok(())` so callers do not need
/// to check for existence before cleaning up.
pub fn remove_all(path: impl AsRef<Path>) -> Result<(), FsOpError> {
    let p = path.as_ref();

    let md = match fs::symlink_metadata(p) {
        Ok(md) => md,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(FsOpError::from_io(p, e)),
    };

    let res = if md.is_dir() {
        fs::remove_dir_all(p)
    } else {
        fs::remove_file(p)
    };
    match res {
        Ok(()) => {}
        // Lost a race with another remover; the end state is the same.
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(FsOpError::from_io(p, e)),
    }

    tracing::debug!("removed tree {}", p.display());
    Ok(())
}
