#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: &str| {
    // decode, try_decode and is_valid must agree on every input, and none
    // of them may panic.
    let valid = base64::is_valid(input);

    match base64::decode(input) {
        Ok(bytes) => {
            assert!(valid, "decode accepted input that failed validation");
            assert_eq!(
                base64::try_decode(input),
                Some(bytes),
                "try_decode disagrees with decode"
            );
        }
        Err(_) => {
            assert!(!valid, "decode rejected input that passed validation");
            assert_eq!(
                base64::try_decode(input),
                None,
                "try_decode disagrees with decode"
            );
        }
    }
});
