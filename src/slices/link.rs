//! Anchor to markdown link conversion
//!
//! | href            | text            | output          |
//! |-----------------|-----------------|-----------------|
//! | safe            | non-blank       | `[text](href)`  |
//! | safe            | blank           | `href`          |
//! | absent / unsafe | anything        | `text`          |
//!
//! Safety is decided by [`crate::security::sanitize_href`].

use super::{Route, Slice};
use crate::context::TraversalContext;
use crate::node::Node;
use crate::security::sanitize_href;

#[derive(Debug, Default, Clone, Copy)]
pub struct LinkConversion;

impl LinkConversion {
    /// Combine an href and already-formatted link text
    pub fn render(href: Option<&str>, text: String) -> String {
        match href.and_then(sanitize_href) {
            Some(url) if !text.trim().is_empty() => format!("[{text}]({url})"),
            Some(url) => url.to_string(),
            None => text,
        }
    }
}

impl Slice for LinkConversion {
    fn name(&self) -> &'static str {
        "link-conversion"
    }

    fn can_handle(&self, node: &Node) -> bool {
        node.has_tag("a")
    }

    fn format(&self, node: &Node, ctx: &TraversalContext, router: &dyn Route) -> String {
        let text = router.route_children(node, ctx);
        Self::render(node.attr("href"), text)
    }
}
