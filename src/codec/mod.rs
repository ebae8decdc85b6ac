//! Transparent compression selected by file name.
//!
//! A name ending in `.gz` (exact, case-sensitive) selects gzip; anything
//! else passes bytes through unchanged. Content is never sniffed, so a
//! misnamed file either decodes as garbage or fails with a format error.

use std::io::{self, Read, Write};
use std::path::Path;

pub mod error;
pub mod reader;
pub mod writer;

pub use error::CodecError;
pub use reader::CodecReader;
pub use writer::CodecWriter;

/// Gzip level used by `compress` (flate2's default).
pub const DEFAULT_GZIP_LEVEL: u32 = 6;

/// Compression format of a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Codec {
    /// Bytes are passed through unchanged.
    #[default]
    Identity,
    /// RFC 1952 gzip.
    Gzip,
}

impl Codec {
    pub const GZIP_SUFFIX: &'static str = ".gz";

    /// Resolve the codec from a file name or path.
    pub fn from_name(name: impl AsRef<Path>) -> Self {
        let name = name.as_ref().as_os_str().as_encoded_bytes();
        if name.ends_with(Self::GZIP_SUFFIX.as_bytes()) {
            Codec::Gzip
        } else {
            Codec::Identity
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Codec::Identity => "identity",
            Codec::Gzip => "gzip",
        }
    }

    /// File name suffix that selects this codec, if any.
    pub const fn suffix(self) -> Option<&'static str> {
        match self {
            Codec::Identity => None,
            Codec::Gzip => Some(Self::GZIP_SUFFIX),
        }
    }

    pub const fn is_compressed(self) -> bool {
        !matches!(self, Codec::Identity)
    }

    pub fn writer<W: Write>(self, inner: W) -> CodecWriter<W> {
        CodecWriter::new(self, inner, DEFAULT_GZIP_LEVEL)
    }

    pub fn reader<R: Read>(self, inner: R) -> Result<CodecReader<R>, CodecError> {
        CodecReader::new(self, inner)
    }
}

/// Wrap `writer` in the codec selected by `name`.
///
/// The result must be `finish`ed for a gzip stream to be complete.
pub fn compress<W: Write>(name: impl AsRef<Path>, writer: W) -> CodecWriter<W> {
    compress_with_level(name, writer, DEFAULT_GZIP_LEVEL)
}

/// Like `compress` with an explicit gzip level (0-9, clamped).
pub fn compress_with_level<W: Write>(name: impl AsRef<Path>, writer: W, level: u32) -> CodecWriter<W> {
    let codec = Codec::from_name(name.as_ref());
    tracing::debug!("compress {} with {} (level {})", name.as_ref().display(), codec.name(), level);
    CodecWriter::new(codec, writer, level)
}

/// Wrap `reader` in the decoder selected by `name`.
pub fn decompress<R: Read>(name: impl AsRef<Path>, reader: R) -> Result<CodecReader<R>, CodecError> {
    let name = name.as_ref();
    let codec = Codec::from_name(name);
    CodecReader::new(codec, reader).inspect_err(|e| {
        tracing::warn!("cannot decode {} as {}: {}", name.display(), codec.name(), e);
    })
}

/// Run `f` against a compressing writer for `name` and always finish it,
/// even when `f` fails. Returns `f`'s error first, then any error from
/// finishing; on success, hands back the sink.
pub fn with_writer<W, F>(name: impl AsRef<Path>, sink: W, f: F) -> io::Result<W>
where
    W: Write,
    F: FnOnce(&mut CodecWriter<W>) -> io::Result<()>,
{
    let mut w = compress(name, sink);
    let res = f(&mut w);
    let finished = w.finish();
    res?;
    finished
}
