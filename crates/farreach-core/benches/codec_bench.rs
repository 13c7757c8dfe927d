//! Criterion benchmarks for the login rejection codec.
//!
//! Encode and decode sit on the connection hot path of the server's auth
//! handler, so both are measured directly and through the registry.
//!
//! Run with:
//! ```bash
//! cargo bench --package farreach-core --bench codec_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use farreach_core::{DecoderRegistry, LoginRejectedMessage, RejectReason};

fn encoded_rejection(reason: RejectReason) -> Vec<u8> {
    let mut bytes = Vec::new();
    LoginRejectedMessage::new(reason).encode(&mut bytes);
    bytes
}

fn bench_encode(c: &mut Criterion) {
    let msg = LoginRejectedMessage::new(RejectReason::ServerIsFull);
    c.bench_function("encode_login_rejected", |b| {
        b.iter(|| {
            let mut buf = Vec::with_capacity(2);
            black_box(&msg).encode(&mut buf);
            buf
        })
    });
}

fn bench_decode(c: &mut Criterion) {
    let bytes = encoded_rejection(RejectReason::UsernameBanned);
    c.bench_function("decode_login_rejected", |b| {
        b.iter(|| LoginRejectedMessage::decode(black_box(&bytes)).expect("valid bytes"))
    });
}

fn bench_registry_decode(c: &mut Criterion) {
    let registry = DecoderRegistry::with_defaults();
    let bytes = encoded_rejection(RejectReason::TooManyTriesIp);
    c.bench_function("registry_decode_login_rejected", |b| {
        b.iter(|| registry.decode(black_box(&bytes)).expect("valid bytes"))
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_registry_decode);
criterion_main!(benches);
