//! Text extraction: the leaf of every recursion

use super::{Route, Slice};
use crate::context::TraversalContext;
use crate::node::Node;

/// Emits the value of text nodes verbatim
#[derive(Debug, Default, Clone, Copy)]
pub struct TextExtraction;

impl Slice for TextExtraction {
    fn name(&self) -> &'static str {
        "text-extraction"
    }

    fn can_handle(&self, node: &Node) -> bool {
        node.is_text()
    }

    fn format(&self, node: &Node, _ctx: &TraversalContext, _router: &dyn Route) -> String {
        node.text_value().to_string()
    }
}
