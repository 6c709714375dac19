//! Node model consumed by the formatting slices
//!
//! A `Node` is the read-only tree the router walks. It is produced once by the
//! parser adapter (see [`crate::parser`]) or built by hand through the
//! constructors below, and each node exclusively owns its children.
//!
//! Tag names are case-insensitive: they are folded to ASCII lower case when a
//! node is constructed, so every slice matches against the lower-cased form.
//!
//! # Example
//!
//! ```rust
//! use html_linearizer::node::Node;
//!
//! let link = Node::element("A")
//!     .with_attr("href", "https://example.com")
//!     .with_child(Node::text("Example"));
//!
//! assert_eq!(link.tag_name(), Some("a"));
//! assert_eq!(link.attr("href"), Some("https://example.com"));
//! ```

/// Sentinel name the input contract uses for text nodes
pub const TEXT_NODE_NAME: &str = "#text";

/// What a node represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Raw character data
    Text,
    /// A tagged element
    Element,
    /// Nameless container, used for the root of a parsed fragment
    Fragment,
}

/// A `name="value"` pair on an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// One unit of the parsed document tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    kind: NodeKind,
    tag: Option<String>,
    text: Option<String>,
    children: Vec<Node>,
    attributes: Vec<Attribute>,
}

impl Node {
    /// Create a text node carrying `value`
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Text,
            tag: None,
            text: Some(value.into()),
            children: Vec::new(),
            attributes: Vec::new(),
        }
    }

    /// Create an element node; the tag name is folded to lower case
    pub fn element(tag: &str) -> Self {
        Self {
            kind: NodeKind::Element,
            tag: Some(tag.to_ascii_lowercase()),
            text: None,
            children: Vec::new(),
            attributes: Vec::new(),
        }
    }

    /// Create an empty fragment (root) node
    pub fn fragment() -> Self {
        Self {
            kind: NodeKind::Fragment,
            tag: None,
            text: None,
            children: Vec::new(),
            attributes: Vec::new(),
        }
    }

    /// Append an attribute, builder style
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push_attr(name, value);
        self
    }

    /// Append a child, builder style
    pub fn with_child(mut self, child: Node) -> Self {
        self.push_child(child);
        self
    }

    /// Append several children, builder style
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Append a child in place. Text nodes never hold children, so this is a
    /// no-op for them.
    pub fn push_child(&mut self, child: Node) {
        if self.kind != NodeKind::Text {
            self.children.push(child);
        }
    }

    /// Append an attribute in place
    pub fn push_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.push(Attribute {
            name: name.into(),
            value: value.into(),
        });
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_text(&self) -> bool {
        self.kind == NodeKind::Text
    }

    /// Lower-cased tag name; `None` for text and fragment nodes
    pub fn tag_name(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Whether this is an element whose tag is `tag` (already lower case)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tag.as_deref() == Some(tag)
    }

    /// Name in the input contract's terms: `#text` for text nodes
    pub fn node_name(&self) -> Option<&str> {
        match self.kind {
            NodeKind::Text => Some(TEXT_NODE_NAME),
            _ => self.tag_name(),
        }
    }

    /// Text content of a text node; empty when absent
    pub fn text_value(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Look up an attribute by exact (case-sensitive) name, first match wins
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }
}
