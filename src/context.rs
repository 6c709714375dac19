//! Traversal context threaded through recursive routing
//!
//! A context is a small `Copy` value. Every slice that enters a nested scope
//! derives a new value from the one it was given and passes that down, so a
//! sibling branch can never observe changes made by another. This is what keeps
//! ordered-list counters independent and nested-list indentation correct.

/// Bullet or numbered list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `ul`, rendered with `* ` markers
    Unordered,
    /// `ol`, rendered with `<n>. ` markers
    Ordered,
}

impl ListKind {
    /// Map a list container tag to its kind
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "ul" => Some(Self::Unordered),
            "ol" => Some(Self::Ordered),
            _ => None,
        }
    }
}

/// State of the list a list item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListContext {
    pub kind: ListKind,
    /// Depth of the owning container
    pub depth: usize,
    /// Number printed for the current ordered item
    pub counter: i64,
}

/// Per-call traversal state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TraversalContext {
    /// List nesting depth; drives indentation
    pub depth: usize,
    pub in_list: bool,
    pub list: Option<ListContext>,
}

impl TraversalContext {
    /// The context a conversion starts from
    pub fn root() -> Self {
        Self::default()
    }

    /// The list the current node is an item of, if any
    pub fn active_list(&self) -> Option<ListContext> {
        if self.in_list { self.list } else { None }
    }

    /// Context for one `li` consumed directly by a container
    pub fn for_list_item(&self, kind: ListKind, counter: i64) -> Self {
        Self {
            depth: self.depth,
            in_list: true,
            list: Some(ListContext {
                kind,
                depth: self.depth,
                counter,
            }),
        }
    }

    /// Context one list level deeper, keeping the current list state
    pub fn nested(&self) -> Self {
        Self {
            depth: self.depth + 1,
            in_list: true,
            list: self.list,
        }
    }
}
