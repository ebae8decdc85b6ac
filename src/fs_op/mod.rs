//! Path operations: single-file primitives with normalized errors.
//!
//! Every operation reports failures as `FsOpError`, whose `NotFound`
//! variant covers both "no such file" and "a path component is not a
//! directory", so callers handle missing paths the same way whichever
//! operation hit them.
//!
//! Nothing here locks: concurrent writers to the same path must be
//! serialized by the caller.

pub mod copy;
pub mod create;
pub mod error;
pub mod helpers;
pub mod mv;
pub mod remove;
pub mod stat;
pub mod write;

pub use copy::copy;
pub use create::{create, mkdir_all, open, open_write};
pub use error::FsOpError;
pub use helpers::{COPY_BUFFER_SIZE, DEFAULT_DIR_MODE, DEFAULT_FILE_MODE};
pub use mv::rename;
pub use remove::{remove, remove_all};
pub use stat::{exists, is_dir, is_file, PathType};
pub use write::{append, read, write, write_with_mode};
