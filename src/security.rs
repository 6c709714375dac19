//! Security checks applied during conversion
//!
//! Two concerns live here:
//!
//! 1. **Href sanitization**: a link target survives only if it resolves to an
//!    `http`, `https` or `mailto` URL. Anything else (`javascript:`, `data:`,
//!    `file:`, unparseable input) is reported as unsafe and the link degrades to
//!    its text.
//! 2. **Tree limits**: elements whose content must never reach the output
//!    (`script`, `style`, ...) and the maximum nesting depth the parser adapter
//!    will materialize, which bounds recursion in the router.

use std::sync::OnceLock;
use url::Url;

/// Default maximum nesting depth for materialized nodes
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Base that relative hrefs are resolved against; only the resulting scheme
/// is inspected, the href itself is emitted unchanged.
const PLACEHOLDER_BASE: &str = "http://placeholder.invalid/";

/// Schemes a link may point at
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Elements whose subtree is dropped when unsafe-element stripping is enabled
const UNSAFE_ELEMENTS: &[&str] = &[
    "script",   // JavaScript source
    "style",    // CSS source
    "noscript", // fallback markup, duplicates page text
    "iframe",
    "object",
    "embed",
    "applet",
    "template", // inert markup, never rendered
];

fn placeholder_base() -> Option<&'static Url> {
    static BASE: OnceLock<Option<Url>> = OnceLock::new();
    BASE.get_or_init(|| Url::parse(PLACEHOLDER_BASE).ok())
        .as_ref()
}

/// Return `href` if it is safe to emit as a link target
///
/// The href is resolved against a fixed placeholder base so that relative
/// references parse, and accepted only when the resolved scheme is one of
/// `http`, `https` or `mailto`. Empty hrefs are treated as absent.
///
/// # Examples
///
/// ```
/// use html_linearizer::security::sanitize_href;
///
/// assert_eq!(sanitize_href("https://example.com"), Some("https://example.com"));
/// assert_eq!(sanitize_href("/docs/intro"), Some("/docs/intro"));
/// assert_eq!(sanitize_href("javascript:alert(1)"), None);
/// ```
pub fn sanitize_href(href: &str) -> Option<&str> {
    if href.is_empty() {
        return None;
    }

    let resolved = placeholder_base()?.join(href).ok()?;
    if ALLOWED_SCHEMES.contains(&resolved.scheme()) {
        Some(href)
    } else {
        tracing::debug!(href, scheme = resolved.scheme(), "rejected link target");
        None
    }
}

/// Validator for tree-shape limits applied by the parser adapter
#[derive(Debug, Clone, Copy)]
pub struct SecurityValidator {
    max_depth: usize,
}

impl SecurityValidator {
    /// Create a validator with the default depth limit
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Create a validator with a custom depth limit
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Whether the element's subtree must never reach the output
    ///
    /// ```
    /// use html_linearizer::security::SecurityValidator;
    ///
    /// let validator = SecurityValidator::new();
    /// assert!(validator.is_unsafe_element("script"));
    /// assert!(!validator.is_unsafe_element("p"));
    /// ```
    pub fn is_unsafe_element(&self, tag_name: &str) -> bool {
        UNSAFE_ELEMENTS.contains(&tag_name)
    }

    /// Whether a node at `depth` may still be materialized
    pub fn allows_depth(&self, depth: usize) -> bool {
        depth <= self.max_depth
    }
}

impl Default for SecurityValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_allowed_schemes() {
        assert_eq!(sanitize_href("https://x.com"), Some("https://x.com"));
        assert_eq!(sanitize_href("http://x.com/a?b=c"), Some("http://x.com/a?b=c"));
        assert_eq!(sanitize_href("mailto:me@x.com"), Some("mailto:me@x.com"));
    }

    #[test]
    fn test_relative_references_pass() {
        assert_eq!(sanitize_href("/path"), Some("/path"));
        assert_eq!(sanitize_href("../parent/page.html"), Some("../parent/page.html"));
        assert_eq!(sanitize_href("#anchor"), Some("#anchor"));
        assert_eq!(sanitize_href("?q=1"), Some("?q=1"));
        assert_eq!(sanitize_href("//cdn.example.com/a"), Some("//cdn.example.com/a"));
    }

    #[test]
    fn test_disallowed_schemes_rejected() {
        assert_eq!(sanitize_href("javascript:alert('xss')"), None);
        assert_eq!(sanitize_href("JavaScript:alert('xss')"), None);
        assert_eq!(sanitize_href("data:text/html,<script>alert(1)</script>"), None);
        assert_eq!(sanitize_href("file:///etc/passwd"), None);
        assert_eq!(sanitize_href("vbscript:msgbox(1)"), None);
        assert_eq!(sanitize_href("ftp://files.example.com"), None);
    }

    #[test]
    fn test_obfuscated_javascript_rejected() {
        assert_eq!(sanitize_href("  javascript:alert(1)"), None);
        assert_eq!(sanitize_href("java\tscript:alert(1)"), None);
    }

    #[test]
    fn test_unparseable_rejected() {
        assert_eq!(sanitize_href("http://[::1"), None);
        assert_eq!(sanitize_href("https://exa mple.com"), None);
    }

    #[test]
    fn test_empty_href_is_absent() {
        assert_eq!(sanitize_href(""), None);
    }

    #[test]
    fn test_unsafe_elements() {
        let validator = SecurityValidator::new();
        for tag in ["script", "style", "noscript", "iframe", "object", "embed"] {
            assert!(validator.is_unsafe_element(tag), "{tag} should be unsafe");
        }
        for tag in ["div", "p", "a", "table", "ul"] {
            assert!(!validator.is_unsafe_element(tag), "{tag} should be allowed");
        }
    }

    #[test]
    fn test_depth_limit() {
        let validator = SecurityValidator::with_max_depth(100);
        assert!(validator.allows_depth(50));
        assert!(validator.allows_depth(100));
        assert!(!validator.allows_depth(101));
        assert_eq!(SecurityValidator::new().max_depth(), DEFAULT_MAX_DEPTH);
    }

    proptest! {
        #[test]
        fn prop_disallowed_schemes_are_rejected(
            leading_ws in "[ \\t\\n\\r]{0,3}",
            payload in "[A-Za-z0-9_/?=&%#.-]{0,64}",
            uppercase in any::<bool>(),
        ) {
            for scheme in ["javascript:", "data:", "vbscript:", "file:", "about:"] {
                let scheme = if uppercase { scheme.to_uppercase() } else { scheme.to_string() };
                let candidate = format!("{leading_ws}{scheme}{payload}");
                prop_assert_eq!(sanitize_href(&candidate), None, "accepted {}", candidate);
            }
        }

        #[test]
        fn prop_https_urls_are_kept_verbatim(path in "[a-z0-9/]{0,30}") {
            let href = format!("https://example.com/{path}");
            prop_assert_eq!(sanitize_href(&href), Some(href.as_str()));
        }
    }
}
