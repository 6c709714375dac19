//! List formatting for `ul`, `ol` and `li`
//!
//! Containers walk their children and hand each direct `li` a fresh item
//! context carrying the list kind and the number to print. The counter is a
//! local of the container call: it advances only after a direct `li` child, so
//! nested lists and stray children never disturb it, and every container
//! (nested or sibling) starts its own count.
//!
//! Items render as `"  " * depth` + marker + inline content. A nested list
//! inside an item starts on its own line one level deeper and supplies the
//! trailing newline itself:
//!
//! ```text
//! <ol><li>P<ol><li>C</li></ol></li></ol>   =>   "1. P\n  1. C\n"
//! ```

use super::{Route, Slice};
use crate::context::{ListKind, TraversalContext};
use crate::node::Node;

const INDENT: &str = "  ";
const BULLET: &str = "* ";

#[derive(Debug, Default, Clone, Copy)]
pub struct ListFormatting;

/// Parse an `ol` `start` attribute
///
/// Takes the leading integer of the value (after leading whitespace and an
/// optional sign), so `"5"`, `" 5th"` and `"5.9"` all give 5. Absent or
/// non-numeric values give 1.
///
/// A parsed zero is kept: `start="0"` (and `"0.5"`) numbers the first item 0
/// rather than treating zero as missing and falling back to 1.
pub fn parse_start(value: Option<&str>) -> i64 {
    let Some(value) = value else {
        return 1;
    };

    let trimmed = value.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return 1;
    }

    match rest[..end].parse::<i64>() {
        Ok(n) if negative => -n,
        Ok(n) => n,
        // Only overflow can fail here
        Err(_) if negative => i64::MIN,
        Err(_) => i64::MAX,
    }
}

fn is_list_container(node: &Node) -> bool {
    node.tag_name().and_then(ListKind::from_tag).is_some()
}

impl ListFormatting {
    fn format_container(
        &self,
        node: &Node,
        kind: ListKind,
        ctx: &TraversalContext,
        router: &dyn Route,
    ) -> String {
        let mut counter = match kind {
            ListKind::Ordered => parse_start(node.attr("start")),
            ListKind::Unordered => 1,
        };

        let mut output = String::new();
        for child in node.children() {
            if child.has_tag("li") {
                let item_ctx = ctx.for_list_item(kind, counter);
                output.push_str(&router.route(child, &item_ctx));
                if kind == ListKind::Ordered {
                    counter = counter.saturating_add(1);
                }
            } else {
                // Stray content directly inside the container
                output.push_str(&router.route(child, &ctx.nested()));
            }
        }
        output
    }

    fn format_item(&self, node: &Node, ctx: &TraversalContext, router: &dyn Route) -> String {
        let Some(list) = ctx.active_list() else {
            // Orphaned item: behave like a block
            let mut output = router.route_children(node, ctx);
            output.push('\n');
            return output;
        };

        let mut output = INDENT.repeat(ctx.depth);
        match list.kind {
            ListKind::Unordered => output.push_str(BULLET),
            ListKind::Ordered => {
                output.push_str(&list.counter.to_string());
                output.push_str(". ");
            }
        }

        let mut has_nested_list = false;
        for child in node.children() {
            if is_list_container(child) {
                has_nested_list = true;
                output.push('\n');
                output.push_str(&router.route(child, &ctx.nested()));
            } else {
                output.push_str(&router.route(child, ctx));
            }
        }

        if !has_nested_list {
            output.push('\n');
        }
        output
    }
}

impl Slice for ListFormatting {
    fn name(&self) -> &'static str {
        "list-formatting"
    }

    fn can_handle(&self, node: &Node) -> bool {
        matches!(node.tag_name(), Some("ul" | "ol" | "li"))
    }

    fn format(&self, node: &Node, ctx: &TraversalContext, router: &dyn Route) -> String {
        match node.tag_name() {
            Some("li") => self.format_item(node, ctx, router),
            Some(tag) => match ListKind::from_tag(tag) {
                Some(kind) => self.format_container(node, kind, ctx, router),
                None => String::new(),
            },
            None => String::new(),
        }
    }
}
