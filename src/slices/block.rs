//! Block-level elements
//!
//! This is the most general slice and sits last in the router. A block
//! concatenates its routed children and always ends with a newline, which is
//! why an empty `<p>` still renders as `"\n"`.
//!
//! A leading newline is added before a child only when that child is itself
//! block-level, produced something, and the block already holds output. Nested
//! blocks are therefore separated by a blank line, while inline children stay
//! on the current line.

use super::{Route, Slice};
use crate::context::TraversalContext;
use crate::node::Node;

/// Tags claimed by this slice. `li` is listed but list formatting is routed
/// first and always wins it.
const BLOCK_ELEMENTS: &[&str] = &[
    "p", "div", "h1", "h2", "h3", "h4", "h5", "h6", "li", "section", "article", "header",
    "footer", "main", "aside", "nav",
];

/// Whether `tag` (lower case) is in the block set
pub fn is_block_element(tag: &str) -> bool {
    BLOCK_ELEMENTS.contains(&tag)
}

/// Whether a child's output begins a new line of its own
fn starts_block(node: &Node) -> bool {
    match node.tag_name() {
        Some("ul" | "ol" | "table") => true,
        Some(tag) => is_block_element(tag),
        None => false,
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BlockFormatting;

impl Slice for BlockFormatting {
    fn name(&self) -> &'static str {
        "block-formatting"
    }

    fn can_handle(&self, node: &Node) -> bool {
        node.tag_name().is_some_and(is_block_element)
    }

    fn format(&self, node: &Node, ctx: &TraversalContext, router: &dyn Route) -> String {
        let mut output = String::new();
        for child in node.children() {
            let content = router.route(child, ctx);
            if content.is_empty() {
                continue;
            }
            if starts_block(child) && !output.is_empty() {
                output.push('\n');
            }
            output.push_str(&content);
        }
        output.push('\n');
        output
    }
}
