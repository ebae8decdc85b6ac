use std::io;

use thiserror::Error;

use crate::errors::ErrorKind;

/// Errors raised while setting up or driving a codec stream.
#[derive(Error, Debug)]
pub enum CodecError {
    /// The input does not start with a valid header for the selected codec.
    #[error("invalid compressed stream: {reason}")]
    Format { reason: String },

    /// The underlying reader failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CodecError {
    pub(crate) fn format(reason: impl Into<String>) -> Self {
        CodecError::Format { reason: reason.into() }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CodecError::Format { .. } => ErrorKind::Format,
            CodecError::Io(e) => ErrorKind::of_io(e),
        }
    }
}

impl From<CodecError> for io::Error {
    fn from(e: CodecError) -> Self {
        match e {
            CodecError::Io(e) => e,
            other @ CodecError::Format { .. } => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}
