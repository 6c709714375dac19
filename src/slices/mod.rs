//! Formatting slices
//!
//! Each slice owns the formatting rules for one category of element. A slice
//! answers two questions: can it handle a node ([`Slice::can_handle`]), and
//! what text does the node produce ([`Slice::format`]). Slices hold no state
//! between calls.
//!
//! Slices that need the text of their children call back into the router
//! through the [`Route`] capability they are handed on every call. The router
//! owns the slices; the slices only borrow the router for the duration of one
//! `format` call, so there is no ownership cycle to wire up after construction.
//!
//! # Whitespace protocol
//!
//! - Text is emitted verbatim; no slice trims or collapses text it did not
//!   produce, except table cells which trim their own content.
//! - A slice that ends a line emits the `\n` itself. Nothing emits a leading
//!   newline except block formatting, and only to separate a nested block
//!   from preceding inline content.

use crate::context::TraversalContext;
use crate::node::Node;

pub mod block;
pub mod line_break;
pub mod link;
pub mod list;
pub mod table;
pub mod text;

pub use block::BlockFormatting;
pub use line_break::LineBreak;
pub use link::LinkConversion;
pub use list::ListFormatting;
pub use table::TableConversion;
pub use text::TextExtraction;

/// Recursion capability handed to slices
pub trait Route {
    /// Format `node` under `ctx`, dispatching to whichever slice claims it
    fn route(&self, node: &Node, ctx: &TraversalContext) -> String;

    /// Route every child of `node` under the same context and concatenate
    fn route_children(&self, node: &Node, ctx: &TraversalContext) -> String {
        let mut output = String::new();
        for child in node.children() {
            output.push_str(&self.route(child, ctx));
        }
        output
    }
}

/// A self-contained formatter for one category of element
pub trait Slice: Send + Sync {
    /// Short identifier used in diagnostics
    fn name(&self) -> &'static str;

    /// Whether this slice claims `node`
    fn can_handle(&self, node: &Node) -> bool;

    /// Produce the text for `node`; only called when `can_handle` returned true
    fn format(&self, node: &Node, ctx: &TraversalContext, router: &dyn Route) -> String;
}
