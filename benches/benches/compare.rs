//! Implementation Comparison Benchmark
//!
//! Places b2hash next to the RustCrypto `blake2` crate, BLAKE3 and SHA-2,
//! plus the bare compression function as a lower bound.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;

use b2hash::kernels::portable;

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_implementations(c: &mut Criterion) {
    let mut group = c.benchmark_group("BLAKE2b Implementations");

    // Scenarios:
    // - Small (7B): single padded block, setup dominated
    // - Medium (1KB): eight blocks, L1 hot
    // - Large (256KB): bulk compression throughput
    let sizes = [7, 1024, 256 * 1024];

    for size in sizes {
        let input = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        // 1. b2hash one-shot
        group.bench_function(format!("b2hash - {size} bytes"), |b| {
            b.iter(|| b2hash::hash(black_box(&input)));
        });

        // 2. RustCrypto blake2 (same algorithm, reference point)
        group.bench_function(format!("blake2 crate - {size} bytes"), |b| {
            use blake2::Digest;
            b.iter(|| blake2::Blake2b512::digest(black_box(&input)));
        });

        // 3. BLAKE3 (successor design)
        group.bench_function(format!("BLAKE3 - {size} bytes"), |b| {
            b.iter(|| blake3::hash(black_box(&input)));
        });

        // 4. SHA-512 (same word size)
        group.bench_function(format!("SHA-512 - {size} bytes"), |b| {
            use sha2::Digest;
            b.iter(|| sha2::Sha512::digest(black_box(&input)));
        });
    }
    group.finish();
}

/// Raw compression function: one 128-byte block, no buffering.
fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("Compression Function");
    group.throughput(Throughput::Bytes(128));

    let block = [0x5Au8; 128];
    let mut h = [0u64; 8];
    group.bench_function("compress", |b| {
        b.iter(|| portable::compress(black_box(&mut h), black_box(&block), 128, false));
    });
    group.finish();
}

criterion_group!(benches, bench_implementations, bench_compress);
criterion_main!(benches);
