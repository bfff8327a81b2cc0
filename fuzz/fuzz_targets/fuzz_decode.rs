#![no_main]
use libfuzzer_sys::fuzz_target;
use nailfile::{decode, encode, DecodeOptions};

fuzz_target!(|data: &[u8]| {
    // This should never crash or panic, even on garbage input
    let options = DecodeOptions::new().keep_raw(true);
    if let Ok(decoded) = decode(data, &options) {
        assert_eq!(decoded.points.len(), decoded.layout.total_entries);

        // Re-encoding always produces a well-formed stream of the same length
        let (bytes, _) = encode(&decoded.points);
        assert_eq!(bytes.len(), decoded.layout.consumed_bytes());
    }

    let _ = decode(data, &DecodeOptions::new().strict());
});
