//! Top-level conversion pipeline
//!
//! ```text
//! html ──parse──▶ Node tree ──route──▶ raw text ──decode entities──▶ nbsp→space ──▶ output
//! ```
//!
//! The router is a pure function of (node, context); the converter only wires
//! the stages together and applies the final string passes.
//!
//! # Output rules
//!
//! - empty input gives an empty string, before any parsing
//! - character references left in the routed text are decoded
//! - U+00A0 (non-breaking space) becomes an ordinary space
//! - non-empty input whose output collapses to nothing gives a single space
//!
//! # Examples
//!
//! ```rust
//! use html_linearizer::converter::Converter;
//!
//! let converter = Converter::new();
//! assert_eq!(converter.convert("<ol><li>A</li><li>B</li></ol>"), "1. A\n2. B\n");
//! assert_eq!(converter.convert(r#"<a href="https://x.com">T</a>"#), "[T](https://x.com)");
//! ```

use crate::charset::{decode_to_utf8, detect_charset};
use crate::context::TraversalContext;
use crate::error::ConversionError;
use crate::node::Node;
use crate::parser::parse_fragment;
use crate::router::Router;
use crate::security::DEFAULT_MAX_DEPTH;
use crate::slices::Route;

/// Conversion options
#[derive(Debug, Clone)]
pub struct ConversionOptions {
    /// Deepest element nesting that is materialized from the parsed document
    pub max_depth: usize,
    /// Drop `script`, `style` and similar subtrees instead of emitting their text
    pub strip_unsafe_elements: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            strip_unsafe_elements: true,
        }
    }
}

/// HTML to linear text converter
///
/// Holds the options and the router; a single converter can be reused for any
/// number of conversions and shared across threads.
pub struct Converter {
    options: ConversionOptions,
    router: Router,
}

impl Converter {
    /// Create a converter with default options
    pub fn new() -> Self {
        Self::with_options(ConversionOptions::default())
    }

    /// Create a converter with custom options
    ///
    /// ```rust
    /// use html_linearizer::converter::{ConversionOptions, Converter};
    ///
    /// let converter = Converter::with_options(ConversionOptions {
    ///     strip_unsafe_elements: false,
    ///     ..Default::default()
    /// });
    /// assert_eq!(converter.convert("<p>a<script>b</script></p>"), "ab\n");
    /// ```
    pub fn with_options(options: ConversionOptions) -> Self {
        Self {
            options,
            router: Router::new(),
        }
    }

    pub fn options(&self) -> &ConversionOptions {
        &self.options
    }

    /// Convert an HTML string
    pub fn convert(&self, html: &str) -> String {
        if html.is_empty() {
            return String::new();
        }

        let root = parse_fragment(html, &self.options);
        self.render(&root)
    }

    /// Convert HTML bytes, detecting and transcoding the charset first
    ///
    /// `content_type` is an optional Content-Type header value whose `charset`
    /// parameter takes priority over any `<meta>` declaration.
    ///
    /// # Errors
    ///
    /// - `ConversionError::EncodingError` if the bytes are invalid for the
    ///   detected charset
    /// - `ConversionError::UnsupportedCharset` if the charset label is unknown
    pub fn convert_bytes(
        &self,
        html: &[u8],
        content_type: Option<&str>,
    ) -> Result<String, ConversionError> {
        if html.is_empty() {
            return Ok(String::new());
        }

        let charset = detect_charset(content_type, html);
        let text = decode_to_utf8(html, &charset)?;
        Ok(self.convert(&text))
    }

    /// Route an already-built tree and apply the final passes
    pub fn render(&self, root: &Node) -> String {
        let raw = self.router.route(root, &TraversalContext::root());
        finish(&raw)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

/// Entity decoding, non-breaking space replacement and the empty fallback
fn finish(raw: &str) -> String {
    let decoded = html_escape::decode_html_entities(raw);
    let text = decoded.replace('\u{a0}', " ");
    if text.is_empty() { " ".to_string() } else { text }
}

/// Convert an HTML string with default options
///
/// ```rust
/// assert_eq!(html_linearizer::convert("<p>Hello</p><p>World</p>"), "Hello\nWorld\n");
/// assert_eq!(html_linearizer::convert(""), "");
/// ```
pub fn convert(html: &str) -> String {
    Converter::new().convert(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(convert(""), "");
    }

    #[test]
    fn test_collapsed_output_falls_back_to_space() {
        assert_eq!(convert("<span></span>"), " ");
        assert_eq!(convert("<!-- only a comment -->"), " ");
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(convert("just some text"), "just some text");
    }

    #[test]
    fn test_paragraphs() {
        assert_eq!(convert("<p>Hello</p>"), "Hello\n");
        assert_eq!(convert("<p></p>"), "\n");
        assert_eq!(convert("<div>Hello</div><p>World</p>"), "Hello\nWorld\n");
    }

    #[test]
    fn test_line_break() {
        assert_eq!(convert("Hello<br>World"), "Hello\nWorld");
        assert_eq!(convert(r#"Hello<br class="x" data-y="z">World"#), "Hello\nWorld");
    }

    #[test]
    fn test_nbsp_becomes_space() {
        assert_eq!(convert("<p>Hello&nbsp;World</p>"), "Hello World\n");
        assert_eq!(convert("A\u{a0}B"), "A B");
    }

    #[test]
    fn test_entities() {
        assert_eq!(convert("<div>A&amp;B</div>"), "A&B\n");
        assert_eq!(convert("<span>&lt;script&gt;</span>"), "<script>");
        assert_eq!(convert("<em>&quot;quoted&quot;</em>"), "\"quoted\"");
        assert_eq!(convert("<strong>&#39;apostrophe&#39;</strong>"), "'apostrophe'");
    }

    #[test]
    fn test_render_prebuilt_tree_decodes_entities() {
        let root = Node::fragment().with_child(
            Node::element("p").with_child(Node::text("Fish &amp; Chips&nbsp;&#33;")),
        );
        assert_eq!(Converter::new().render(&root), "Fish & Chips !\n");
    }

    #[test]
    fn test_convert_bytes_utf8() {
        let result = Converter::new()
            .convert_bytes(b"<p>\xE4\xB8\x96\xE7\x95\x8C</p>", None)
            .expect("valid UTF-8");
        assert_eq!(result, "世界\n");
    }

    #[test]
    fn test_convert_bytes_transcodes() {
        let result = Converter::new()
            .convert_bytes(b"<p>Caf\xE9</p>", Some("text/html; charset=ISO-8859-1"))
            .expect("latin1 input");
        assert_eq!(result, "Café\n");

        let result = Converter::new()
            .convert_bytes(b"<meta charset=\"windows-1252\"><p>\x80 10</p>", None)
            .expect("meta declared charset");
        assert_eq!(result, "€ 10\n");
    }

    #[test]
    fn test_convert_bytes_errors() {
        let converter = Converter::new();
        assert!(matches!(
            converter.convert_bytes(b"\xFF\xFE<p>x</p>", None),
            Err(ConversionError::EncodingError(_))
        ));
        assert!(matches!(
            converter.convert_bytes(b"<p>x</p>", Some("text/html; charset=x-unknown-test")),
            Err(ConversionError::UnsupportedCharset(_))
        ));
        assert_eq!(converter.convert_bytes(b"", None).expect("empty"), "");
    }

    #[test]
    fn test_converter_is_reusable() {
        let converter = Converter::new();
        let first = converter.convert("<ol><li>A</li></ol>");
        let second = converter.convert("<ol><li>A</li></ol>");
        assert_eq!(first, second);
    }

    #[test]
    fn test_leading_and_trailing_whitespace_kept() {
        assert_eq!(convert("  hello"), "  hello");
        assert_eq!(convert("\nHello"), "\nHello");
        assert_eq!(convert("\t x "), "\t x ");
        assert_eq!(convert("<p> a</p>"), " a\n");
        assert_eq!(convert(&convert("<p> a</p>")), " a\n");
    }

    /// Small HTML documents built from the tags the slices understand
    fn html_tree() -> impl Strategy<Value = String> {
        let leaf = prop_oneof![
            "[a-zA-Z0-9 ]{0,12}",
            Just("<br>".to_string()),
        ];
        leaf.prop_recursive(4, 48, 4, |inner| {
            let children = prop::collection::vec(inner, 0..4).prop_map(|c| c.concat()).boxed();
            let block_tags = vec!["p", "div", "h2", "section", "span", "strong"];
            prop_oneof![
                (prop::sample::select(block_tags), children.clone())
                    .prop_map(|(tag, body)| format!("<{tag}>{body}</{tag}>")),
                children
                    .clone()
                    .prop_map(|body| format!("<a href=\"https://example.com/\">{body}</a>")),
                (
                    prop::sample::select(vec!["ul", "ol"]),
                    prop::collection::vec(children.clone(), 0..3),
                )
                    .prop_map(|(tag, items)| {
                        let items: String = items.iter().map(|i| format!("<li>{i}</li>")).collect();
                        format!("<{tag}>{items}</{tag}>")
                    }),
                prop::collection::vec(prop::collection::vec(children, 1..3), 1..3).prop_map(
                    |rows| {
                        let rows: String = rows
                            .iter()
                            .map(|cells| {
                                let cells: String =
                                    cells.iter().map(|c| format!("<td>{c}</td>")).collect();
                                format!("<tr>{cells}</tr>")
                            })
                            .collect();
                        format!("<table>{rows}</table>")
                    }
                ),
            ]
        })
    }

    proptest! {
        #[test]
        fn prop_text_without_markup_is_identity(
            text in "[ \t\n]{0,3}[a-zA-Z0-9 .,!?:;()-]{0,80}[ \t\n]{0,3}",
        ) {
            prop_assert_eq!(convert(&text), text);
        }

        #[test]
        fn prop_reconversion_is_identity(html in html_tree()) {
            let once = convert(&html);
            prop_assert_eq!(convert(&once), once);
        }

        #[test]
        fn prop_sibling_ordered_lists_restart(
            first in 1usize..6,
            second in 1usize..6,
        ) {
            let items = |n: usize| (0..n).map(|i| format!("<li>i{i}</li>")).collect::<String>();
            let html = format!("<ol>{}</ol><ol>{}</ol>", items(first), items(second));

            let numbers = |n: usize| {
                (0..n).map(|i| format!("{}. i{i}\n", i + 1)).collect::<String>()
            };
            prop_assert_eq!(convert(&html), format!("{}{}", numbers(first), numbers(second)));
        }
    }
}
