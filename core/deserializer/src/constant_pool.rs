//! Constant pool: the table of identifier names shared by all nodes.
//!
//! The table is a run of fixed 8-byte entries `{offset: u32 LE, length: u32 LE}`
//! inside the serialized stream. An entry with the high bit of `offset` set holds
//! bytes embedded in the stream itself; otherwise it is a slice of the source.

use crate::errors::{DeserializeError, Result};

const ENTRY_SIZE: usize = 8;
const EMBEDDED_BIT: u32 = 0x8000_0000;

pub struct ConstantPool<'a> {
    serialized: &'a [u8],
    source: &'a [u8],
    table_base: usize,
    count: u32,
}

impl<'a> ConstantPool<'a> {
    /// Validates that the whole table lies inside `serialized`.
    pub fn new(serialized: &'a [u8], source: &'a [u8], table_base: u32, count: u32) -> Result<Self> {
        let table_base = table_base as usize;
        let fits = (count as usize)
            .checked_mul(ENTRY_SIZE)
            .and_then(|size| size.checked_add(table_base))
            .is_some_and(|end| end <= serialized.len());
        if !fits {
            return Err(DeserializeError::out_of_data(
                table_base,
                format!("constant pool of {count} entries does not fit in the stream"),
            ));
        }
        Ok(Self {
            serialized,
            source,
            table_base,
            count,
        })
    }

    #[must_use]
    pub fn len(&self) -> u32 {
        self.count
    }

    /// Resolves the 0-based entry `index` to the exact bytes it names.
    pub fn get(&self, index: u32) -> Result<&'a [u8]> {
        if index >= self.count {
            return Err(DeserializeError::IndexOutOfRange {
                index,
                count: self.count,
            });
        }
        let entry_at = self.table_base + index as usize * ENTRY_SIZE;
        let entry = &self.serialized[entry_at..entry_at + ENTRY_SIZE];
        let offset = u32::from_le_bytes([entry[0], entry[1], entry[2], entry[3]]);
        let length = u32::from_le_bytes([entry[4], entry[5], entry[6], entry[7]]) as usize;

        let (buffer, start, origin) = if offset & EMBEDDED_BIT == 0 {
            (self.source, offset as usize, "source")
        } else {
            (self.serialized, (offset & !EMBEDDED_BIT) as usize, "stream")
        };
        let bytes = start
            .checked_add(length)
            .and_then(|end| buffer.get(start..end))
            .ok_or_else(|| {
                DeserializeError::out_of_data(
                    entry_at,
                    format!("constant {index} spans {start}+{length} outside the {origin}"),
                )
            })?;

        Ok(bytes)
    }
}
