//! HTML Linearizer
//!
//! Converts an HTML fragment into plain, markdown-flavored text. Paragraphs,
//! headings, line breaks, links, (nested, mixed) lists and simple tables keep
//! their structure; other markup degrades to the concatenated text of its
//! children.
//!
//! # Architecture
//!
//! - `parser`: HTML5 parsing with html5ever, copied into the owned `node` model
//! - `router`: dispatches each node to the first formatting slice that claims it
//! - `slices`: text extraction, line break, link conversion, list formatting,
//!   table conversion and block formatting
//! - `context`: traversal state threaded by value through the recursion
//! - `converter`: parse, route, decode entities, final passes
//! - `security`: href sanitization and tree limits
//! - `charset`: encoding detection for byte input
//!
//! # Example
//!
//! ```rust
//! let text = html_linearizer::convert(
//!     "<ol><li>Parent<ol><li>Child</li></ol></li></ol>",
//! );
//! assert_eq!(text, "1. Parent\n  1. Child\n");
//! ```

pub mod charset;
pub mod context;
pub mod converter;
pub mod error;
pub mod node;
pub mod parser;
pub mod router;
pub mod security;
pub mod slices;

pub use context::{ListContext, ListKind, TraversalContext};
pub use converter::{ConversionOptions, Converter, convert};
pub use error::ConversionError;
pub use node::{Attribute, Node, NodeKind};
pub use router::Router;
pub use slices::{Route, Slice};
