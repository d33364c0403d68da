use crate::cursor::ByteCursor;
use crate::errors::{DeserializeError, Result};

pub const MAGIC: &[u8; 5] = b"PRISM";
pub const MAJOR_VERSION: u8 = 0;
pub const MINOR_VERSION: u8 = 24;
pub const PATCH_VERSION: u8 = 0;

/// Location mode byte for offset-based locations, the only mode supported.
const OFFSET_LOCATIONS: u8 = 0;

/// Checks the 9 header bytes: marker, version triplet and location mode.
///
/// The version must match exactly; field layouts change between minor versions
/// without any framing that would let a mismatched stream be read safely.
pub fn validate(cursor: &mut ByteCursor<'_>) -> Result<()> {
    let available = &cursor.data()[..cursor.len().min(MAGIC.len())];
    if !MAGIC.starts_with(available) {
        return Err(DeserializeError::FormatMismatch);
    }
    // A stream cut inside the marker is truncated, not foreign.
    cursor.read_bytes(MAGIC.len())?;

    let version = cursor.read_bytes(3)?;
    if version != [MAJOR_VERSION, MINOR_VERSION, PATCH_VERSION] {
        return Err(DeserializeError::VersionMismatch {
            expected: format!("{MAJOR_VERSION}.{MINOR_VERSION}.{PATCH_VERSION}"),
            found: format!("{}.{}.{}", version[0], version[1], version[2]),
        });
    }

    let mode = cursor.read_byte()?;
    if mode != OFFSET_LOCATIONS {
        return Err(DeserializeError::UnsupportedConfiguration(mode));
    }
    Ok(())
}
