#![no_main]

use base64_external::{engine::general_purpose::STANDARD, Engine};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let encoded = base64::encode(data);

    // Conformance with external crate
    let external_encoded = STANDARD.encode(data);
    assert_eq!(encoded, external_encoded, "External crate encode mismatch");

    if data.is_empty() {
        // Empty text never validates, so there is nothing to decode.
        assert!(encoded.is_empty());
        return;
    }

    assert!(base64::is_valid(&encoded), "Encoded output failed validation");
    assert_eq!(encoded.len() % 4, 0, "Encoded length not a multiple of 4");

    // Test encode roundtrip
    let decoded = base64::decode(&encoded).expect("Encoded output failed to decode");
    assert_eq!(data, &decoded[..], "Roundtrip failed");
});
