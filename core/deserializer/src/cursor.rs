//! Forward-only reader over the serialized stream.

use prism_ast::nodes::Location;

use crate::errors::{DeserializeError, Result};

pub struct ByteCursor<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> ByteCursor<'a> {
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// The whole underlying stream, independent of the current position.
    #[must_use]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        let end = self
            .position
            .checked_add(len)
            .filter(|&end| end <= self.data.len())
            .ok_or_else(|| {
                DeserializeError::out_of_data(self.position, format!("need {len} more bytes"))
            })?;
        let bytes = &self.data[self.position..end];
        self.position = end;
        Ok(bytes)
    }

    pub fn read_byte(&mut self) -> Result<u8> {
        Ok(self.read_bytes(1)?[0])
    }

    /// Reads one byte without consuming it.
    pub fn peek_byte(&self) -> Result<u8> {
        self.data
            .get(self.position)
            .copied()
            .ok_or_else(|| DeserializeError::out_of_data(self.position, "need 1 more byte"))
    }

    pub fn read_u32_le(&mut self) -> Result<u32> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Unsigned LEB128 value, truncated to 32 bits.
    #[allow(clippy::cast_possible_truncation)]
    pub fn read_var_uint(&mut self) -> Result<u32> {
        let start = self.position;
        let mut rest = &self.data[start..];
        let value = leb128::read::unsigned(&mut rest)
            .map_err(|e| DeserializeError::out_of_data(start, format!("bad varuint: {e}")))?;
        self.position = self.data.len() - rest.len();
        Ok(value as u32)
    }

    /// Zigzag-encoded signed varint.
    #[allow(clippy::cast_possible_wrap)]
    pub fn read_var_sint(&mut self) -> Result<i32> {
        let value = self.read_var_uint()?;
        Ok(((value >> 1) as i32) ^ -((value & 1) as i32))
    }

    /// A varuint length followed by that many bytes.
    pub fn read_embedded_bytes(&mut self) -> Result<&'a [u8]> {
        let len = self.read_var_uint()?;
        self.read_bytes(len as usize)
    }

    pub fn read_location(&mut self) -> Result<Location> {
        let start = self.read_var_uint()?;
        let length = self.read_var_uint()?;
        Ok(Location::new(start, length))
    }

    /// A presence byte, then a location when it is nonzero.
    pub fn read_optional_location(&mut self) -> Result<Option<Location>> {
        if self.read_byte()? == 0 {
            Ok(None)
        } else {
            self.read_location().map(Some)
        }
    }
}
