//! File access helpers for code that persists state to disk.
//!
//! - [`fs_op`]: create, read, write, append, copy and remove single files
//!   with one normalized error type.
//! - [`codec`]: wrap any reader or writer with gzip when the file name ends
//!   in `.gz`, and pass it through untouched otherwise.
//!
//! The two halves do not depend on each other; combine them by opening a
//! file with `fs_op` and wrapping the handle with `codec`:
//!
//! ```no_run
//! use std::io::Write;
//! use statefile::{codec, fs_op};
//!
//! let path = "/tmp/state.json.gz";
//! let file = fs_op::open_write(path)?;
//! let mut w = codec::compress(path, file);
//! w.write_all(b"{}")?;
//! w.finish()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod codec;
pub mod config;
pub mod errors;
pub mod fs_op;
pub mod logging;

pub use crate::codec::{compress, decompress, Codec, CodecError, CodecReader, CodecWriter};
pub use crate::config::{ConfigError, Settings};
pub use crate::errors::ErrorKind;
pub use crate::fs_op::FsOpError;
