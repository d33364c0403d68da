//! Tree traversal.
//!
//! [`Node::accept`] only dispatches a single node. [`walk`] drives a full pre-order
//! traversal, and [`Node::descendants`] yields the same order as an iterator.

use crate::nodes::{Node, Visitor};

/// Visits `node` and then every descendant in pre-order, children in field order.
pub fn walk<V: Visitor + ?Sized>(node: &Node, visitor: &mut V) {
    let mut stack = vec![node];
    while let Some(current) = stack.pop() {
        current.accept(visitor);
        stack.extend(current.children().into_iter().rev());
    }
}

/// Pre-order iterator over a node and all of its descendants.
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        self.stack.extend(current.children().into_iter().rev());
        Some(current)
    }
}

impl Node {
    /// This node followed by all of its descendants, in pre-order.
    #[must_use]
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}
