//! Decode failures.
//!
//! Every variant aborts the whole decode: there is no partial tree. These describe
//! a broken stream or a protocol mismatch, never a problem in the parsed source
//! text, which is reported through the result's diagnostics instead.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[must_use = "errors must not be silently ignored"]
pub enum DeserializeError {
    #[error("stream does not start with the PRISM marker")]
    FormatMismatch,

    #[error("unsupported format version {found}, expected {expected}")]
    VersionMismatch { expected: String, found: String },

    /// The stream was produced with absolute line/column locations.
    #[error("unsupported location mode {0}, only offset locations are supported")]
    UnsupportedConfiguration(u8),

    #[error("out of data at offset {offset}: {reason}")]
    OutOfData { offset: usize, reason: String },

    #[error("unknown node type {tag} at offset {offset}")]
    UnknownNodeType { tag: u8, offset: usize },

    #[error("unknown diagnostic type {id}")]
    UnknownDiagnosticType { id: u8 },

    #[error("flags value {value:#x} at offset {offset} exceeds 15 bits")]
    InvalidFlags { value: u32, offset: usize },

    #[error("constant index {index} out of range for pool of {count}")]
    IndexOutOfRange { index: u32, count: u32 },

    /// An internal invariant failed while decoding; the panic message is kept.
    #[error("internal decoder failure: {0}")]
    Internal(String),
}

impl DeserializeError {
    pub(crate) fn out_of_data(offset: usize, reason: impl Into<String>) -> Self {
        DeserializeError::OutOfData {
            offset,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DeserializeError>;
