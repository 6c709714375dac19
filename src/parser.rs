//! HTML5 parsing into the [`Node`] model
//!
//! html5ever does the actual parsing, following the WHATWG fragment algorithm
//! with `<body>` as the context element, so malformed markup (unclosed tags,
//! misnesting, stray end tags) is repaired the way a browser would repair it
//! and leading whitespace survives. The resulting `RcDom` is then copied into
//! an owned [`Node`] tree:
//!
//! - the children of the synthetic `<html>` root become the children of a
//!   `Fragment` root
//! - stray `<html>`, `<head>` and `<body>` tags in the input are ignored
//! - elements keep their (lower-case) tag and attributes in source order
//! - text nodes keep their already entity-decoded value
//! - comments, doctypes and processing instructions are dropped
//! - unsafe elements (`script`, `style`, ...) are dropped with their subtree
//!   when [`ConversionOptions::strip_unsafe_elements`] is set
//! - elements nested deeper than [`ConversionOptions::max_depth`] are dropped,
//!   which bounds the recursion depth of the router
//!
//! Implied elements inserted by the tree builder (`tbody` inside `table`, for
//! instance) are kept; no slice claims them, so they pass straight through.
//!
//! # Examples
//!
//! ```rust
//! use html_linearizer::converter::ConversionOptions;
//! use html_linearizer::parser::parse_fragment;
//!
//! let root = parse_fragment("<p>Hello<br>World", &ConversionOptions::default());
//! let p = &root.children()[0];
//! assert_eq!(p.tag_name(), Some("p"));
//! assert_eq!(p.children().len(), 3);
//! ```

use html5ever::tendril::TendrilSink;
use html5ever::{QualName, local_name, namespace_url, ns, parse_fragment as parse_html_fragment};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::converter::ConversionOptions;
use crate::node::Node;
use crate::security::SecurityValidator;

/// Parse an HTML string as body content and return it as a fragment
pub fn parse_fragment(html: &str, options: &ConversionOptions) -> Node {
    let context = QualName::new(None, ns!(html), local_name!("body"));
    let dom = parse_html_fragment(RcDom::default(), Default::default(), context, Vec::new())
        .one(html);

    let mut root = Node::fragment();
    let Some(html_root) = find_child_element(&dom.document, "html") else {
        return root;
    };

    let mut builder = TreeBuilder::new(options);
    for child in html_root.children.borrow().iter() {
        if let Some(node) = builder.build(child, 1) {
            root.push_child(node);
        }
    }
    root
}

fn find_child_element(parent: &Handle, tag: &str) -> Option<Handle> {
    parent
        .children
        .borrow()
        .iter()
        .find(|child| {
            matches!(child.data, NodeData::Element { ref name, .. } if name.local.as_ref() == tag)
        })
        .cloned()
}

/// Copies an `RcDom` subtree into owned nodes, applying the tree limits
struct TreeBuilder {
    validator: SecurityValidator,
    strip_unsafe_elements: bool,
    truncated: bool,
}

impl TreeBuilder {
    fn new(options: &ConversionOptions) -> Self {
        Self {
            validator: SecurityValidator::with_max_depth(options.max_depth),
            strip_unsafe_elements: options.strip_unsafe_elements,
            truncated: false,
        }
    }

    fn build(&mut self, handle: &Handle, depth: usize) -> Option<Node> {
        match handle.data {
            NodeData::Text { ref contents } => {
                let text = contents.borrow();
                Some(Node::text(&**text))
            }
            NodeData::Element {
                ref name,
                ref attrs,
                ..
            } => {
                let tag = name.local.as_ref();

                if self.strip_unsafe_elements && self.validator.is_unsafe_element(tag) {
                    tracing::debug!(tag, "dropping unsafe element");
                    return None;
                }

                if !self.validator.allows_depth(depth) {
                    if !self.truncated {
                        tracing::warn!(
                            depth,
                            max_depth = self.validator.max_depth(),
                            "nesting depth limit reached, dropping deeper content"
                        );
                        self.truncated = true;
                    }
                    return None;
                }

                let mut node = Node::element(tag);
                for attr in attrs.borrow().iter() {
                    node.push_attr(attr.name.local.as_ref(), attr.value.to_string());
                }
                for child in handle.children.borrow().iter() {
                    if let Some(child) = self.build(child, depth + 1) {
                        node.push_child(child);
                    }
                }
                Some(node)
            }
            // Comments, doctypes, processing instructions
            _ => None,
        }
    }
}
