#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(parts) = subrosa::wire::decode_sealed(data) {
        assert_eq!(parts.nonce.len() + parts.ciphertext_and_tag.len(), data.len());
    }
});
