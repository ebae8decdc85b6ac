use std::io::{self, Chain, Cursor, Read};

use flate2::read::MultiGzDecoder;

use crate::codec::error::CodecError;
use crate::codec::Codec;

/// Size of the fixed part of a gzip member header (RFC 1952).
pub const GZIP_HEADER_LEN: usize = 10;
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];
const CM_DEFLATE: u8 = 8;
const FLG_RESERVED: u8 = 0xe0;

type Replayed<R> = Chain<Cursor<[u8; GZIP_HEADER_LEN]>, R>;

/// Byte source that optionally gzip-decodes what is read from it.
///
/// Concatenated gzip members decode as one continuous stream.
#[derive(Debug)]
pub enum CodecReader<R: Read> {
    Identity(R),
    Gzip(MultiGzDecoder<Replayed<R>>),
}

impl<R: Read> CodecReader<R> {
    /// Wrap `inner` for `codec`.
    ///
    /// For `Gzip` the fixed header is read and checked up front, so a
    /// stream with the wrong magic number, an unknown method or reserved
    /// flag bits, or fewer than ten bytes, fails here with
    /// `CodecError::Format` rather than on the first read.
    pub fn new(codec: Codec, mut inner: R) -> Result<Self, CodecError> {
        match codec {
            Codec::Identity => Ok(CodecReader::Identity(inner)),
            Codec::Gzip => {
                let header = read_header(&mut inner)?;
                let replayed = Cursor::new(header).chain(inner);
                Ok(CodecReader::Gzip(MultiGzDecoder::new(replayed)))
            }
        }
    }

    pub fn codec(&self) -> Codec {
        match self {
            CodecReader::Identity(_) => Codec::Identity,
            CodecReader::Gzip(_) => Codec::Gzip,
        }
    }

    /// Give back the underlying reader. For gzip, bytes already buffered by
    /// the decoder are discarded.
    pub fn into_inner(self) -> R {
        match self {
            CodecReader::Identity(r) => r,
            CodecReader::Gzip(dec) => dec.into_inner().into_inner().1,
        }
    }
}

impl<R: Read> Read for CodecReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            CodecReader::Identity(r) => r.read(buf),
            CodecReader::Gzip(dec) => dec.read(buf),
        }
    }
}

fn read_header<R: Read>(inner: &mut R) -> Result<[u8; GZIP_HEADER_LEN], CodecError> {
    let mut header = [0u8; GZIP_HEADER_LEN];
    let mut filled = 0;
    while filled < GZIP_HEADER_LEN {
        match inner.read(&mut header[filled..]) {
            Ok(0) => {
                return Err(CodecError::format(format!(
                    "truncated gzip header ({filled} of {GZIP_HEADER_LEN} bytes)"
                )))
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(CodecError::Io(e)),
        }
    }

    if header[..2] != GZIP_MAGIC {
        return Err(CodecError::format(format!(
            "bad gzip magic number {:02x} {:02x}",
            header[0], header[1]
        )));
    }
    if header[2] != CM_DEFLATE {
        return Err(CodecError::format(format!(
            "unsupported gzip compression method {}",
            header[2]
        )));
    }
    if header[3] & FLG_RESERVED != 0 {
        return Err(CodecError::format(format!(
            "reserved gzip flag bits set ({:#04x})",
            header[3]
        )));
    }
    Ok(header)
}
