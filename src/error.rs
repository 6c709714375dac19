//! Error types for conversion operations

use thiserror::Error;

/// Errors that can occur while converting byte input
///
/// String input never fails: malformed trees fall back to defaults and unsafe
/// hrefs are downgraded to plain text. Only decoding raw bytes can go wrong.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// Input bytes are invalid for the detected charset
    #[error("Encoding error: {0}")]
    EncodingError(String),
    /// Detected charset label is not known to the transcoder
    #[error("Unsupported charset '{0}'")]
    UnsupportedCharset(String),
}
