//! `<br>` handling

use super::{Route, Slice};
use crate::context::TraversalContext;
use crate::node::Node;

#[derive(Debug, Default, Clone, Copy)]
pub struct LineBreak;

impl Slice for LineBreak {
    fn name(&self) -> &'static str {
        "line-break"
    }

    fn can_handle(&self, node: &Node) -> bool {
        node.has_tag("br")
    }

    /// Always exactly one newline; attributes and children are ignored
    fn format(&self, _node: &Node, _ctx: &TraversalContext, _router: &dyn Route) -> String {
        "\n".to_string()
    }
}
