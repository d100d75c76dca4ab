//! Per-engine benchmarks at several payload sizes.
//!
//! Run with: `cargo bench --bench engines`
//!
//! Single calls measure the engine itself; the `*_many` groups add the
//! batch fan-out on a multi-threaded runtime.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tokio::runtime::Runtime;

use subrosa::{
    Algorithm, Confidential, DecryptionRequest, EncryptionRequest, HashWidth, KeySize,
    SharedSecret,
};

/// Payload sizes to benchmark.
const PAYLOAD_SIZES: &[usize] = &[64, 1024, 65_536];

const BATCH: usize = 32;

fn runtime() -> Runtime {
    Runtime::new().expect("tokio runtime")
}

// ---------------------------------------------------------------------------
// Key material
// ---------------------------------------------------------------------------

fn bench_keygen(c: &mut Criterion) {
    let rt = runtime();
    let aes = Confidential::new(Algorithm::Aes { key_size: KeySize::Bits256 });
    let agreement = Confidential::new(Algorithm::Agreement {
        hash: HashWidth::Bits256,
        key_size: KeySize::Bits256,
    });

    let alice = rt.block_on(agreement.generate_key_pair()).expect("key pair");
    let bob = rt.block_on(agreement.generate_key_pair()).expect("key pair");
    let salt = rt.block_on(agreement.generate_salt()).expect("salt");
    let secret = SharedSecret::for_peer(
        &alice.private_key,
        bob.public_key.as_deref().expect("public key"),
        &salt,
    );

    let mut group = c.benchmark_group("keygen");
    group.bench_function("aes_wrapped_key", |b| {
        b.iter(|| rt.block_on(aes.generate_key(None)));
    });
    group.bench_function("x25519_key_pair", |b| {
        b.iter(|| rt.block_on(agreement.generate_key_pair()));
    });
    group.bench_function("salt", |b| {
        b.iter(|| rt.block_on(agreement.generate_salt()));
    });
    group.bench_function("agreement_derive", |b| {
        b.iter(|| rt.block_on(agreement.generate_key(Some(&secret))));
    });
    group.finish();
}

// ---------------------------------------------------------------------------
// Encrypt / decrypt / hash by payload size
// ---------------------------------------------------------------------------

fn bench_payloads(c: &mut Criterion) {
    let rt = runtime();
    let aes = Confidential::new(Algorithm::Aes { key_size: KeySize::Bits256 });
    let sha = Confidential::new(Algorithm::Sha2 { hash: HashWidth::Bits256 });
    let key = rt.block_on(aes.generate_key(None)).expect("key");

    let mut group = c.benchmark_group("payload");
    for &size in PAYLOAD_SIZES {
        let text = "x".repeat(size);
        let encrypt = EncryptionRequest::with_key(text.clone(), key.clone());
        let sealed = rt.block_on(aes.encrypt(&encrypt)).expect("encrypt");
        let decrypt = DecryptionRequest::with_key(sealed, key.clone());
        let hash = EncryptionRequest::keyless(text);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("aes_256_encrypt", size), &encrypt, |b, r| {
            b.iter(|| rt.block_on(aes.encrypt(r)));
        });
        group.bench_with_input(BenchmarkId::new("aes_256_decrypt", size), &decrypt, |b, r| {
            b.iter(|| rt.block_on(aes.decrypt(r)));
        });
        group.bench_with_input(BenchmarkId::new("sha_256", size), &hash, |b, r| {
            b.iter(|| rt.block_on(sha.encrypt(r)));
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Batch fan-out
// ---------------------------------------------------------------------------

fn bench_batch(c: &mut Criterion) {
    let rt = runtime();
    let aes = Confidential::new(Algorithm::Aes { key_size: KeySize::Bits128 });
    let key = rt.block_on(aes.generate_key(None)).expect("key");
    let requests: Vec<EncryptionRequest> = (0..BATCH)
        .map(|i| EncryptionRequest::with_key(format!("item {i}"), key.clone()))
        .collect();

    let mut group = c.benchmark_group("batch");
    group.throughput(Throughput::Elements(BATCH as u64));
    group.bench_function("encrypt_many", |b| {
        b.iter(|| rt.block_on(aes.encrypt_many(requests.clone())));
    });
    group.bench_function("generate_keys", |b| {
        b.iter(|| rt.block_on(aes.generate_keys(BATCH, None)));
    });
    group.finish();
}

criterion_group!(benches, bench_keygen, bench_payloads, bench_batch);
criterion_main!(benches);
