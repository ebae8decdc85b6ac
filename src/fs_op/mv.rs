use std::fs;
use std::path::Path;

use crate::fs_op::error::FsOpError;

/// Rename `old` to `new` within one filesystem, replacing a file at `new`.
///
/// No copy fallback is attempted across devices; callers wanting one can
/// `copy` then `remove`. When it fails, the error names `old` if `old` is
/// gone and `new` otherwise.
pub fn rename<P: AsRef<Path>, Q: AsRef<Path>>(old: P, new: Q) -> Result<(), FsOpError> {
    let s = old.as_ref();
    let d = new.as_ref();
    fs::rename(s, d).map_err(|e| {
        let at = if fs::symlink_metadata(s).is_err() { s } else { d };
        FsOpError::from_io(at, e)
    })?;
    tracing::debug!("renamed {} -> {}", s.display(), d.display());
    Ok(())
}
