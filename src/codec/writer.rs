use std::io::{self, Write};

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::codec::Codec;

/// Byte sink that optionally gzip-encodes what is written to it.
///
/// The wrapper owns the encoder state, not the sink: `finish` hands the
/// sink back instead of closing it. Pass `&mut sink` to keep using it.
///
/// For `Gzip`, the stream is only valid once `finish` has written the
/// trailer. Dropping an unfinished gzip writer still tries to write the
/// trailer, but any error from that attempt is lost.
#[derive(Debug)]
pub enum CodecWriter<W: Write> {
    Identity(W),
    Gzip(GzEncoder<W>),
}

impl<W: Write> CodecWriter<W> {
    pub fn new(codec: Codec, inner: W, level: u32) -> Self {
        match codec {
            Codec::Identity => CodecWriter::Identity(inner),
            Codec::Gzip => CodecWriter::Gzip(GzEncoder::new(inner, Compression::new(level.min(9)))),
        }
    }

    pub fn codec(&self) -> Codec {
        match self {
            CodecWriter::Identity(_) => Codec::Identity,
            CodecWriter::Gzip(_) => Codec::Gzip,
        }
    }

    /// Finalize the stream and return the underlying writer, flushed.
    ///
    /// Consumes the wrapper, so the trailer is written exactly once.
    pub fn finish(self) -> io::Result<W> {
        let mut inner = match self {
            CodecWriter::Identity(w) => w,
            CodecWriter::Gzip(enc) => enc.finish()?,
        };
        inner.flush()?;
        Ok(inner)
    }

    pub fn get_ref(&self) -> &W {
        match self {
            CodecWriter::Identity(w) => w,
            CodecWriter::Gzip(enc) => enc.get_ref(),
        }
    }

    /// Writing directly to the sink of a gzip writer corrupts the stream.
    pub fn get_mut(&mut self) -> &mut W {
        match self {
            CodecWriter::Identity(w) => w,
            CodecWriter::Gzip(enc) => enc.get_mut(),
        }
    }
}

impl<W: Write> Write for CodecWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            CodecWriter::Identity(w) => w.write(buf),
            CodecWriter::Gzip(enc) => enc.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            CodecWriter::Identity(w) => w.flush(),
            CodecWriter::Gzip(enc) => enc.flush(),
        }
    }
}
