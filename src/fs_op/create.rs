use std::fs::{self, File, OpenOptions};
use std::path::Path;

use crate::fs_op::error::{FsOpError, IoResultExt};
use crate::fs_op::helpers::{self, DEFAULT_DIR_MODE, DEFAULT_FILE_MODE};

/// Create an empty file at `path`, truncating it if it already exists.
///
/// Parent directories are not created: if one is missing this fails with
/// `FsOpError::NotFound` and nothing is left behind.
pub fn create<P: AsRef<Path>>(path: P) -> Result<(), FsOpError> {
    let p = path.as_ref();
    open_write(p)?;
    tracing::debug!("created {}", p.display());
    Ok(())
}

/// Open `path` for writing, creating it (mode `0o640` on Unix) or
/// truncating it. Parent directories are not created.
///
/// The returned handle is closed when dropped; wrap it with
/// `codec::compress` for transparent compression.
pub fn open_write<P: AsRef<Path>>(path: P) -> Result<File, FsOpError> {
    let p = path.as_ref();
    let mut opts = OpenOptions::new();
    opts.write(true).create(true).truncate(true);
    helpers::set_create_mode(&mut opts, DEFAULT_FILE_MODE);
    opts.open(p).at(p)
}

/// Open `path` for reading.
pub fn open<P: AsRef<Path>>(path: P) -> Result<File, FsOpError> {
    let p = path.as_ref();
    File::open(p).at(p)
}

/// Create directory and parents. Succeeds when the directory already exists.
pub fn mkdir_all<P: AsRef<Path>>(path: P) -> Result<(), FsOpError> {
    mkdir_all_with_mode(path, DEFAULT_DIR_MODE)
}

pub(crate) fn mkdir_all_with_mode<P: AsRef<Path>>(path: P, mode: u32) -> Result<(), FsOpError> {
    let p = path.as_ref();
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;
    builder.create(p).at(p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs_op::stat::exists;
    use tempfile::tempdir;

    #[test]
    fn create_file_and_dir() {
        let td = tempdir().unwrap();
        let dir = td.path().join("a/b");
        let file = dir.join("f.txt");
        mkdir_all(&dir).unwrap();
        create(&file).unwrap();
        assert!(exists(&file));
        assert_eq!(fs::read(&file).unwrap(), b"");
    }

    #[test]
    fn create_truncates_existing_file() {
        let td = tempdir().unwrap();
        let file = td.path().join("f.txt");
        fs::write(&file, b"old content").unwrap();
        create(&file).unwrap();
        assert_eq!(fs::metadata(&file).unwrap().len(), 0);
    }

    #[test]
    fn create_without_parent_is_not_found() {
        let td = tempdir().unwrap();
        let file = td.path().join("missing").join("f.txt");
        let err = create(&file).unwrap_err();
        assert!(err.is_not_found(), "unexpected error: {err:?}");
        assert!(!exists(&file));
        assert!(!exists(td.path().join("missing")));
    }

    #[test]
    fn mkdir_all_is_idempotent() {
        let td = tempdir().unwrap();
        let dir = td.path().join("x/y/z");
        mkdir_all(&dir).unwrap();
        mkdir_all(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn open_missing_is_not_found() {
        let td = tempdir().unwrap();
        assert!(open(td.path().join("nope")).unwrap_err().is_not_found());
    }
}
