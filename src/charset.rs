//! Charset detection and transcoding for byte input
//!
//! Detection cascade:
//!
//! 1. `charset=` parameter of the Content-Type value, if given
//! 2. `<meta charset>` or `<meta http-equiv="Content-Type" content="...charset=...">`
//!    within the first 1024 bytes of the document
//! 3. UTF-8
//!
//! The detected label is then used to transcode the bytes to UTF-8 before the
//! parser sees them.

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

use crate::error::ConversionError;

const DEFAULT_CHARSET: &str = "UTF-8";

/// Meta declarations must appear this early to be honoured
const META_SCAN_LIMIT: usize = 1024;

fn content_type_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?i)charset\s*=\s*["']?([^"';,\s]+)"#).ok())
        .as_ref()
}

fn meta_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?i)<meta\b[^>]*?charset\s*=\s*["']?([^"';,\s/>]+)"#).ok())
        .as_ref()
}

/// Charset label from a Content-Type value such as `text/html; charset=UTF-8`
pub fn charset_from_content_type(content_type: &str) -> Option<String> {
    content_type_regex()?
        .captures(content_type)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Charset label declared by a `<meta>` tag near the top of the document
pub fn charset_from_meta(html: &[u8]) -> Option<String> {
    let head = String::from_utf8_lossy(&html[..html.len().min(META_SCAN_LIMIT)]);
    meta_regex()?
        .captures(&head)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Run the detection cascade; the label is upper-cased
pub fn detect_charset(content_type: Option<&str>, html: &[u8]) -> String {
    content_type
        .and_then(charset_from_content_type)
        .or_else(|| charset_from_meta(html))
        .map(|label| label.to_ascii_uppercase())
        .unwrap_or_else(|| DEFAULT_CHARSET.to_string())
}

/// Decode `html` according to `charset`
///
/// UTF-8 input is borrowed when valid; other charsets are transcoded with
/// `encoding_rs`. Malformed sequences are an error rather than being replaced.
pub fn decode_to_utf8<'a>(html: &'a [u8], charset: &str) -> Result<Cow<'a, str>, ConversionError> {
    if charset.eq_ignore_ascii_case(DEFAULT_CHARSET) || charset.eq_ignore_ascii_case("UTF8") {
        return std::str::from_utf8(html).map(Cow::Borrowed).map_err(|e| {
            ConversionError::EncodingError(format!(
                "invalid UTF-8 at byte {}: {}",
                e.valid_up_to(),
                e
            ))
        });
    }

    let encoding = encoding_rs::Encoding::for_label(charset.as_bytes())
        .ok_or_else(|| ConversionError::UnsupportedCharset(charset.to_string()))?;

    encoding
        .decode_without_bom_handling_and_without_replacement(html)
        .ok_or_else(|| {
            ConversionError::EncodingError(format!("invalid byte sequence for charset '{charset}'"))
        })
}
