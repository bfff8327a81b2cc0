#![no_main]
use libfuzzer_sys::fuzz_target;
use nailfile::validation::{validate_bytes, ValidationLevel};
use nailfile::{decode, DecodeOptions};

fuzz_target!(|data: &[u8]| {
    // Strict validation and strict decoding must agree
    let report = validate_bytes(data, ValidationLevel::Strict);
    let decoded = decode(data, &DecodeOptions::new().strict());
    assert_eq!(report.is_valid(), decoded.is_ok());
});
