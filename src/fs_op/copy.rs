use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::Path;

use crate::fs_op::error::{FsOpError, IoResultExt};
use crate::fs_op::helpers::{self, COPY_BUFFER_SIZE, DEFAULT_DIR_MODE};

const OWNER_WRITE: u32 = 0o200;

/// Copy the content of `old` to `new`, replacing whatever `new` held.
///
/// - A missing `old` fails with `FsOpError::NotFound` and `new` is not
///   touched.
/// - Missing parent directories of `new` are created (`0o750`).
/// - On Unix a newly created `new` gets the permission bits of `old`, plus
///   owner write.
/// - Copying a file onto itself, or onto a hard link of itself, is a no-op.
/// - The copy is streamed and not atomic: if it fails midway `new` holds a
///   prefix of `old`, and the whole copy has to be redone.
///
/// Returns the number of bytes copied.
pub fn copy<P: AsRef<Path>, Q: AsRef<Path>>(old: P, new: Q) -> Result<u64, FsOpError> {
    copy_with(old.as_ref(), new.as_ref(), COPY_BUFFER_SIZE, DEFAULT_DIR_MODE)
}

pub(crate) fn copy_with(
    old: &Path,
    new: &Path,
    buffer_size: usize,
    dir_mode: u32,
) -> Result<u64, FsOpError> {
    let mut src = File::open(old).at(old)?;
    let md = src.metadata().at(old)?;
    if md.is_dir() {
        return Err(FsOpError::from_io(old, io::Error::other("source is a directory")));
    }

    // Truncating the destination would wipe the source.
    if is_same_file(old, &md, new) {
        tracing::debug!("copy {} onto itself, nothing to do", old.display());
        return Ok(md.len());
    }

    helpers::ensure_parent_exists(new, dir_mode)?;
    let mut opts = OpenOptions::new();
    opts.write(true).create(true).truncate(true);
    // Owner keeps write access so a later copy can replace this one.
    helpers::set_create_mode(&mut opts, helpers::mode_of(&md) | OWNER_WRITE);
    let mut dst = opts.open(new).at(new)?;

    let copied = pump(&mut src, old, &mut dst, new, buffer_size.max(1))?;
    tracing::debug!("copied {} bytes {} -> {}", copied, old.display(), new.display());
    Ok(copied)
}

// Errors are attributed to the side that raised them.
fn pump(
    src: &mut File,
    old: &Path,
    dst: &mut File,
    new: &Path,
    buffer_size: usize,
) -> Result<u64, FsOpError> {
    let mut buf = vec![0u8; buffer_size];
    let mut total = 0u64;
    loop {
        let n = match src.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(FsOpError::from_io(old, e)),
        };
        dst.write_all(&buf[..n]).at(new)?;
        total += n as u64;
    }
    dst.flush().at(new)?;
    Ok(total)
}

// Hard links share an inode under different paths, so compare identity
// rather than names.
#[cfg(unix)]
fn is_same_file(_old: &Path, src_md: &fs::Metadata, new: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;
    match fs::metadata(new) {
        Ok(dst_md) => dst_md.dev() == src_md.dev() && dst_md.ino() == src_md.ino(),
        Err(_) => false,
    }
}

#[cfg(not(unix))]
fn is_same_file(old: &Path, _src_md: &fs::Metadata, new: &Path) -> bool {
    match (fs::canonicalize(old), fs::canonicalize(new)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
