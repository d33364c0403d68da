#![warn(clippy::pedantic)]
//! Decoder for the Prism serialization format, version 0.24.0.
//!
//! The engine parses Ruby source and emits a compact binary image of the syntax
//! tree. This crate turns that image back into a [`ParseResult`]:
//!
//! ```rust,no_run
//! let source = std::fs::read("hello.rb")?;
//! let serialized = std::fs::read("hello.bin")?;
//! let result = prism_deserializer::deserialize(&serialized, &source)?;
//! println!("{} errors", result.errors().len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Stream layout
//!
//! ```text
//! "PRISM" major minor patch location-mode
//! encoding-name  start-line  line-offsets[]
//! comments[]  magic-comments[]  data-location?
//! errors[]  warnings[]
//! pool-table-base(u32 LE)  pool-count
//! root node ... constant pool table
//! ```
//!
//! Lengths, counts and offsets are unsigned LEB128 varints unless noted. The whole
//! source buffer must be the one the engine parsed: locations and most constants
//! are slices of it.
//!
//! ## Failure model
//!
//! Decoding either produces a complete tree or a [`DeserializeError`]; no partial
//! tree is ever returned. The public entry point also converts any panic raised
//! while decoding into [`DeserializeError::Internal`], so a corrupted stream cannot
//! bring down the caller.

mod constant_pool;
mod cursor;
mod diagnostics;
pub mod errors;
mod header;
mod loader;

use std::panic::{self, AssertUnwindSafe};

use prism_ast::decode::FieldDecoder;
use prism_ast::result::ParseResult;
use tracing::{debug, warn};

use crate::constant_pool::ConstantPool;
use crate::cursor::ByteCursor;
pub use crate::errors::DeserializeError;
use crate::errors::Result;
pub use crate::header::{MAGIC, MAJOR_VERSION, MINOR_VERSION, PATCH_VERSION};
use crate::loader::NodeDecoder;

/// Decodes `serialized`, the engine's output for `source`.
///
/// # Errors
///
/// Returns a [`DeserializeError`] describing the first problem found in the
/// stream. Syntax errors in `source` are not failures; they are listed in
/// [`ParseResult::errors`].
pub fn deserialize(serialized: &[u8], source: &[u8]) -> Result<ParseResult> {
    guarded(|| decode(serialized, source))
}

/// Runs `decode`, turning a panic into [`DeserializeError::Internal`].
fn guarded<T>(decode: impl FnOnce() -> Result<T>) -> Result<T> {
    match panic::catch_unwind(AssertUnwindSafe(decode)) {
        Ok(result) => result,
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|message| (*message).to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            warn!(%message, "decoder panicked, returning internal error");
            Err(DeserializeError::Internal(message))
        }
    }
}

fn decode(serialized: &[u8], source: &[u8]) -> Result<ParseResult> {
    let mut cursor = ByteCursor::new(serialized);
    header::validate(&mut cursor)?;

    let encoding = String::from_utf8_lossy(cursor.read_embedded_bytes()?).into_owned();
    let start_line = cursor.read_var_sint()?;
    // Line offsets are not kept; byte offsets are the only position type.
    let line_count = cursor.read_var_uint()?;
    for _ in 0..line_count {
        cursor.read_var_uint()?;
    }
    debug!(%encoding, start_line, line_count, "read stream header");

    let comments = diagnostics::read_comments(&mut cursor)?;
    let magic_comments = diagnostics::read_magic_comments(&mut cursor)?;
    let data_location = cursor.read_optional_location()?;
    let errors = diagnostics::read_errors(&mut cursor)?;
    let warnings = diagnostics::read_warnings(&mut cursor)?;
    debug!(
        comments = comments.len(),
        magic_comments = magic_comments.len(),
        errors = errors.len(),
        warnings = warnings.len(),
        "read diagnostics"
    );

    let table_base = cursor.read_u32_le()?;
    let constant_count = cursor.read_var_uint()?;
    let pool = ConstantPool::new(serialized, source, table_base, constant_count)?;
    debug!(table_base, constant_count, "built constant pool");

    let root = NodeDecoder::new(&mut cursor, source, &pool).node()?;

    Ok(ParseResult::new(
        encoding,
        root,
        comments,
        magic_comments,
        data_location,
        errors,
        warnings,
    ))
}
