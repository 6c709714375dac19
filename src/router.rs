//! Element router
//!
//! The router owns the slices in a fixed priority order and hands each node to
//! the first slice whose [`Slice::can_handle`] returns true. Exactly one slice
//! formats a node. Nodes no slice claims fall back to the concatenated output
//! of their children.
//!
//! # Priority
//!
//! 1. text extraction
//! 2. link conversion
//! 3. line break
//! 4. list formatting
//! 5. table conversion
//! 6. block formatting
//!
//! The order is part of the contract: more specific slices come first so that,
//! for example, `li` is claimed by list formatting and never by the generic
//! block slice.

use crate::context::TraversalContext;
use crate::node::Node;
use crate::slices::{
    BlockFormatting, LineBreak, LinkConversion, ListFormatting, Route, Slice, TableConversion,
    TextExtraction,
};

/// Dispatches nodes to formatting slices
pub struct Router {
    slices: Vec<Box<dyn Slice>>,
}

impl Router {
    /// Create a router with the standard slices in priority order
    pub fn new() -> Self {
        Self {
            slices: vec![
                Box::new(TextExtraction),
                Box::new(LinkConversion),
                Box::new(LineBreak),
                Box::new(ListFormatting),
                Box::new(TableConversion),
                Box::new(BlockFormatting),
            ],
        }
    }

    /// The slice that would format `node`, if any
    pub fn slice_for(&self, node: &Node) -> Option<&dyn Slice> {
        self.slices
            .iter()
            .map(|slice| slice.as_ref())
            .find(|slice| slice.can_handle(node))
    }

    /// Names of the registered slices, in priority order
    pub fn slice_names(&self) -> Vec<&'static str> {
        self.slices.iter().map(|slice| slice.name()).collect()
    }
}

impl Route for Router {
    fn route(&self, node: &Node, ctx: &TraversalContext) -> String {
        match self.slice_for(node) {
            Some(slice) => {
                tracing::trace!(slice = slice.name(), tag = ?node.tag_name(), "dispatch");
                slice.format(node, ctx, self)
            }
            // Unclaimed: concatenate children; a childless node yields ""
            None => self.route_children(node, ctx),
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
