#![warn(clippy::pedantic)]
//! Syntax tree model for the Prism serialization format, version 0.24.0.
//!
//! The crate is pure data: it knows the shape of every node kind, the flag groups,
//! comments and diagnostics, but not how bytes become nodes. Wire decoding lives in
//! `prism-deserializer`, which drives [`nodes::Node::decode_fields`] through the
//! [`decode::FieldDecoder`] trait.
//!
//! ## Traversal
//!
//! ```text
//! Node::accept(visitor)   one node, dispatched to Visitor::visit_<kind>_node
//! Node::children()        direct children in field order
//! visitor::walk(node, v)  pre-order over the whole subtree
//! Node::descendants()     the same order as an iterator
//! ```

pub mod comments;
pub mod decode;
pub mod diagnostics;
pub mod flags;
pub mod nodes;
pub(crate) mod nodes_impl;
pub mod result;
pub mod visitor;
