use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::fs_op::error::{FsOpError, IoResultExt};
use crate::fs_op::helpers::{self, DEFAULT_DIR_MODE, DEFAULT_FILE_MODE};

/// Read the whole file at `path` into memory.
pub fn read<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, FsOpError> {
    let p = path.as_ref();
    let data = fs::read(p).at(p)?;
    tracing::debug!("read {} bytes from {}", data.len(), p.display());
    Ok(data)
}

/// Write `data` to `path`, replacing any existing content.
///
/// Missing parent directories are created (`0o750`). A newly created file
/// gets mode `0o640` (subject to the umask); an existing file keeps its
/// permission bits.
pub fn write<P: AsRef<Path>>(path: P, data: &[u8]) -> Result<(), FsOpError> {
    write_with(path.as_ref(), data, DEFAULT_FILE_MODE, DEFAULT_DIR_MODE, false)
}

/// Like `write`, and the file's permission bits are set to exactly `mode`,
/// whether or not it existed before. The mode is applied through the open
/// handle before any data is written. No-op for the mode on non-Unix
/// platforms.
pub fn write_with_mode<P: AsRef<Path>>(path: P, data: &[u8], mode: u32) -> Result<(), FsOpError> {
    write_with(path.as_ref(), data, mode, DEFAULT_DIR_MODE, true)
}

pub(crate) fn write_with(
    p: &Path,
    data: &[u8],
    mode: u32,
    dir_mode: u32,
    force_mode: bool,
) -> Result<(), FsOpError> {
    helpers::ensure_parent_exists(p, dir_mode)?;

    let mut opts = OpenOptions::new();
    opts.write(true).create(true).truncate(true);
    helpers::set_create_mode(&mut opts, mode);
    let mut f = opts.open(p).at(p)?;
    // Mode first, so a failed chmod never follows a completed write.
    if force_mode {
        helpers::set_mode(&f, p, mode)?;
    }
    f.write_all(data).at(p)?;
    f.flush().at(p)?;
    tracing::debug!("wrote {} bytes to {}", data.len(), p.display());
    Ok(())
}

/// Append `data` to the file at `path`, creating it (mode `0o640`) if
/// needed. No separator is inserted.
///
/// The parent directory must exist; otherwise this fails with
/// `FsOpError::NotFound` and no file is created.
pub fn append<P: AsRef<Path>>(path: P, data: &[u8]) -> Result<(), FsOpError> {
    let p = path.as_ref();
    let mut opts = OpenOptions::new();
    opts.append(true).create(true);
    helpers::set_create_mode(&mut opts, DEFAULT_FILE_MODE);
    let mut f = opts.open(p).at(p)?;
    f.write_all(data).at(p)?;
    tracing::debug!("appended {} bytes to {}", data.len(), p.display());
    Ok(())
}
