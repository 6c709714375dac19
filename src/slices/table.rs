//! Simple pipe-delimited tables
//!
//! Every row becomes one line `| a | b |`. Header cells get no special
//! styling and no separator row is emitted; `th` and `td` are interchangeable.

use super::{Route, Slice};
use crate::context::TraversalContext;
use crate::node::Node;

/// Cells collected from one `tr`
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<String>,
}

impl TableRow {
    /// Serialize to a pipe-delimited line; a row without cells renders nothing
    pub fn to_line(&self) -> String {
        if self.cells.is_empty() {
            return String::new();
        }
        format!("| {} |\n", self.cells.join(" | "))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TableConversion;

fn is_cell(node: &Node) -> bool {
    matches!(node.tag_name(), Some("td" | "th"))
}

impl TableConversion {
    fn cell_text(&self, cell: &Node, ctx: &TraversalContext, router: &dyn Route) -> String {
        router.route_children(cell, ctx).trim().to_string()
    }

    fn collect_row(&self, tr: &Node, ctx: &TraversalContext, router: &dyn Route) -> TableRow {
        TableRow {
            cells: tr
                .children()
                .iter()
                .filter(|child| is_cell(child))
                .map(|cell| self.cell_text(cell, ctx, router))
                .collect(),
        }
    }
}

impl Slice for TableConversion {
    fn name(&self) -> &'static str {
        "table-conversion"
    }

    fn can_handle(&self, node: &Node) -> bool {
        matches!(node.tag_name(), Some("table" | "tr" | "td" | "th"))
    }

    fn format(&self, node: &Node, ctx: &TraversalContext, router: &dyn Route) -> String {
        match node.tag_name() {
            Some("table") => router.route_children(node, ctx),
            Some("tr") => self.collect_row(node, ctx, router).to_line(),
            Some("td" | "th") => self.cell_text(node, ctx, router),
            _ => String::new(),
        }
    }
}
