#![no_main]

use html_linearizer::converter::Converter;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Errors are expected for invalid encodings; panics are not
    let _ = Converter::new().convert_bytes(data, None);
});
