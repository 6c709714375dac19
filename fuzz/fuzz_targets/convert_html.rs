#![no_main]

use html_linearizer::converter::{ConversionOptions, Converter};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(html) = std::str::from_utf8(data) else {
        return;
    };

    let converter = Converter::with_options(ConversionOptions {
        max_depth: 256,
        ..Default::default()
    });
    let text = converter.convert(html);

    // Only empty input may produce empty output
    assert_eq!(text.is_empty(), html.is_empty());
    assert!(!text.contains('\u{a0}'));
});
