#![no_main]

use libfuzzer_sys::fuzz_target;
use once_cell::sync::Lazy;
use subrosa::{Algorithm, Confidential, DecryptionRequest, KeySize};

static RUNTIME: Lazy<tokio::runtime::Runtime> = Lazy::new(|| {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
});

static KEYED: Lazy<(Confidential, Vec<u8>)> = Lazy::new(|| {
    let c = Confidential::new(Algorithm::Aes { key_size: KeySize::Bits256 });
    let key = RUNTIME.block_on(c.generate_key(None)).unwrap();
    (c, key)
});

// First byte splits the input into an attacker-chosen wrapped key and box.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let rest = &data[1..];
    let split = (data[0] as usize) % (rest.len() + 1);
    let (forged_key, sealed) = rest.split_at(split);
    let (c, key) = &*KEYED;

    let with_real_key = RUNTIME.block_on(c.decrypt(&DecryptionRequest::with_key(sealed, key.clone())));
    if sealed.len() < subrosa::wire::MIN_SEALED_BYTES {
        assert!(with_real_key.is_none());
    }
    let _ = RUNTIME.block_on(c.decrypt(&DecryptionRequest::with_key(sealed, forged_key)));
});
