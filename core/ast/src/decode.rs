//! Field-level decoding seam between the node table and a wire reader.

use crate::nodes::{ByteString, Integer, Location, Node};

/// Source of typed node fields, consumed in wire order by
/// [`Node::decode_fields`].
///
/// Implementors own the cursor and the constant pool; the node table only decides
/// which field kind comes next.
pub trait FieldDecoder {
    type Error;

    /// A complete node: tag byte, location, then its fields. Implementors must
    /// tolerate arbitrarily deep nesting.
    fn node(&mut self) -> Result<Node, Self::Error>;

    /// A node, or `None` when the next byte is zero.
    fn optional_node(&mut self) -> Result<Option<Node>, Self::Error>;

    /// A varuint count followed by that many nodes.
    fn node_list(&mut self) -> Result<Vec<Node>, Self::Error>;

    fn string(&mut self) -> Result<ByteString, Self::Error>;

    /// A required constant pool reference.
    fn constant(&mut self) -> Result<ByteString, Self::Error>;

    /// A constant pool reference, or `None` when the next byte is zero.
    fn optional_constant(&mut self) -> Result<Option<ByteString>, Self::Error>;

    fn constant_list(&mut self) -> Result<Vec<ByteString>, Self::Error>;

    fn location(&mut self) -> Result<Location, Self::Error>;

    fn optional_location(&mut self) -> Result<Option<Location>, Self::Error>;

    fn integer(&mut self) -> Result<Integer, Self::Error>;

    fn uint8(&mut self) -> Result<u8, Self::Error>;

    fn uint32(&mut self) -> Result<u32, Self::Error>;

    /// Raw flag bits, already checked to fit in 15 bits.
    fn flags(&mut self) -> Result<u16, Self::Error>;
}
