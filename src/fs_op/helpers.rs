use std::fs::{self, File, OpenOptions};
use std::path::Path;

use crate::fs_op::create::mkdir_all_with_mode;
use crate::fs_op::error::{FsOpError, IoResultExt};

/// Permission bits for files created by `write`, `append` and `create`.
pub const DEFAULT_FILE_MODE: u32 = 0o640;

/// Permission bits for directories created on behalf of `write` and `copy`.
pub const DEFAULT_DIR_MODE: u32 = 0o750;

/// Buffer used when streaming one file into another (64 KiB).
pub const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Ensure the parent directory of `p` exists, creating it with `dir_mode`.
pub(crate) fn ensure_parent_exists(p: &Path, dir_mode: u32) -> Result<(), FsOpError> {
    match p.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => mkdir_all_with_mode(parent, dir_mode),
        _ => Ok(()),
    }
}

/// Mode applied only when `opts` ends up creating a new file.
pub(crate) fn set_create_mode(opts: &mut OpenOptions, mode: u32) {
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        opts.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = (opts, mode);
}

/// Force the permission bits of the open file `f` (at `p`) to `mode`.
///
/// The create-time mode is filtered by the process umask; this is not.
/// Permissions are checked at open time, so writing through `f` still
/// works after narrowing the mode.
pub(crate) fn set_mode(f: &File, p: &Path, mode: u32) -> Result<(), FsOpError> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        f.set_permissions(fs::Permissions::from_mode(mode)).at(p)
    }
    #[cfg(not(unix))]
    {
        let _ = (f, p, mode);
        Ok(())
    }
}

/// Permission bits of `p`, for carrying them over to a copy.
#[cfg(unix)]
pub(crate) fn mode_of(md: &fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    md.permissions().mode() & 0o7777
}

#[cfg(not(unix))]
pub(crate) fn mode_of(_md: &fs::Metadata) -> u32 {
    DEFAULT_FILE_MODE
}
