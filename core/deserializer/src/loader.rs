//! Recursive node decoding.
//!
//! [`NodeDecoder`] supplies typed fields to the generated node table in
//! `prism-ast`; the table decides which field comes next, this module decides how
//! each field kind is laid out on the wire.
//!
//! Nesting depth is only bounded by the stream length, so `NodeDecoder::node`
//! moves onto a fresh stack segment whenever the current one runs low.

use num_bigint::{BigInt, BigUint, Sign};
use prism_ast::decode::FieldDecoder;
use prism_ast::nodes::{ByteString, Integer, Location, Node, NodeKind};

use crate::constant_pool::ConstantPool;
use crate::cursor::ByteCursor;
use crate::errors::{DeserializeError, Result};

/// Largest flags value a node may carry.
const MAX_FLAGS: u32 = 0x7FFF;

/// Remaining stack below which a new segment is allocated before descending.
const RED_ZONE: usize = 128 * 1024;
const STACK_SEGMENT: usize = 2 * 1024 * 1024;

const SOURCE_STRING: u8 = 1;
const EMBEDDED_STRING: u8 = 2;

pub struct NodeDecoder<'c, 'a> {
    cursor: &'c mut ByteCursor<'a>,
    source: &'a [u8],
    pool: &'c ConstantPool<'a>,
}

impl<'c, 'a> NodeDecoder<'c, 'a> {
    pub fn new(cursor: &'c mut ByteCursor<'a>, source: &'a [u8], pool: &'c ConstantPool<'a>) -> Self {
        Self {
            cursor,
            source,
            pool,
        }
    }

    /// Wire constant ids are 1-based.
    fn resolve_constant(&self, id: u32) -> Result<ByteString> {
        let index = id.checked_sub(1).ok_or(DeserializeError::IndexOutOfRange {
            index: id,
            count: self.pool.len(),
        })?;
        self.pool.get(index).map(ByteString::from)
    }

    fn tagged_node(&mut self) -> Result<Node> {
        let offset = self.cursor.position();
        let tag = self.cursor.read_byte()?;
        let kind =
            NodeKind::from_tag(tag).ok_or(DeserializeError::UnknownNodeType { tag, offset })?;
        let location = self.cursor.read_location()?;
        Node::decode_fields(kind, location, self)
    }
}

impl FieldDecoder for NodeDecoder<'_, '_> {
    type Error = DeserializeError;

    fn node(&mut self) -> Result<Node> {
        stacker::maybe_grow(RED_ZONE, STACK_SEGMENT, || self.tagged_node())
    }

    fn optional_node(&mut self) -> Result<Option<Node>> {
        if self.cursor.peek_byte()? == 0 {
            self.cursor.read_byte()?;
            Ok(None)
        } else {
            self.node().map(Some)
        }
    }

    fn node_list(&mut self) -> Result<Vec<Node>> {
        let count = self.cursor.read_var_uint()?;
        let mut nodes = Vec::new();
        for _ in 0..count {
            nodes.push(self.node()?);
        }
        Ok(nodes)
    }

    fn string(&mut self) -> Result<ByteString> {
        let offset = self.cursor.position();
        match self.cursor.read_byte()? {
            SOURCE_STRING => {
                let location = self.cursor.read_location()?;
                let bytes = location.slice(self.source).ok_or_else(|| {
                    DeserializeError::out_of_data(
                        offset,
                        format!("string {location} lies outside the source"),
                    )
                })?;
                Ok(ByteString::from(bytes))
            }
            EMBEDDED_STRING => Ok(ByteString::from(self.cursor.read_embedded_bytes()?)),
            kind => Err(DeserializeError::out_of_data(
                offset,
                format!("unknown string kind {kind}"),
            )),
        }
    }

    fn constant(&mut self) -> Result<ByteString> {
        let id = self.cursor.read_var_uint()?;
        self.resolve_constant(id)
    }

    fn optional_constant(&mut self) -> Result<Option<ByteString>> {
        if self.cursor.peek_byte()? == 0 {
            self.cursor.read_byte()?;
            Ok(None)
        } else {
            self.constant().map(Some)
        }
    }

    fn constant_list(&mut self) -> Result<Vec<ByteString>> {
        let count = self.cursor.read_var_uint()?;
        let mut constants = Vec::new();
        for _ in 0..count {
            constants.push(self.constant()?);
        }
        Ok(constants)
    }

    fn location(&mut self) -> Result<Location> {
        self.cursor.read_location()
    }

    fn optional_location(&mut self) -> Result<Option<Location>> {
        self.cursor.read_optional_location()
    }

    /// Sign byte, word count, then 32-bit words least significant first.
    fn integer(&mut self) -> Result<Integer> {
        let negative = self.cursor.read_byte()? != 0;
        let offset = self.cursor.position();
        let length = self.cursor.read_var_uint()?;
        if length == 0 {
            return Err(DeserializeError::out_of_data(
                offset,
                "integer with no words",
            ));
        }
        let mut words = Vec::new();
        for _ in 0..length {
            words.push(self.cursor.read_var_uint()?);
        }
        let sign = if negative { Sign::Minus } else { Sign::Plus };
        Ok(Integer::new(BigInt::from_biguint(
            sign,
            BigUint::from_slice(&words),
        )))
    }

    fn uint8(&mut self) -> Result<u8> {
        self.cursor.read_byte()
    }

    fn uint32(&mut self) -> Result<u32> {
        self.cursor.read_var_uint()
    }

    fn flags(&mut self) -> Result<u16> {
        let offset = self.cursor.position();
        let value = self.cursor.read_var_uint()?;
        u16::try_from(value)
            .ok()
            .filter(|_| value <= MAX_FLAGS)
            .ok_or(DeserializeError::InvalidFlags { value, offset })
    }
}
