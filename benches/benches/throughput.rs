//! b2hash Comprehensive Criterion Benchmark
//!
//! Statistically rigorous performance measurements across all scenarios.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::prelude::*;
use std::hint::black_box;

const KB: usize = 1024;
const MB: usize = 1024 * 1024;

fn random_input(size: usize) -> Vec<u8> {
    let mut input = vec![0u8; size];
    rand::rng().fill(&mut input[..]);
    input
}

// =============================================================================
// BENCHMARK 1: LATENCY
// =============================================================================

/// Hot path latency for small inputs (IDs, nonces, short MACs).
fn bench_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Latency");

    let sizes = [
        (16, "16B"),
        (64, "64B"),
        (128, "128B-one-block"),
        (129, "129B-two-blocks"),
        (KB, "1KB"),
        (4 * KB, "4KB"),
    ];

    for (size, name) in sizes {
        let input = random_input(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &input,
            |b, data| b.iter(|| b2hash::hash(black_box(data))),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: FILES
// =============================================================================

/// Throughput for file-sized inputs.
fn bench_files(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Files");
    group.sample_size(30);

    let sizes = [
        (64 * KB, "64KB"),
        (512 * KB, "512KB"),
        (MB, "1MB"),
        (16 * MB, "16MB"),
        (64 * MB, "64MB"),
    ];

    for (size, name) in sizes {
        let input = random_input(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &input,
            |b, data| b.iter(|| b2hash::hash(black_box(data))),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: STREAMING
// =============================================================================

/// Throughput for incremental updates (network streams, file readers).
fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Streaming");
    group.sample_size(50);

    let test_cases = [
        (MB, 1, "1MB-byte-at-a-time"),
        (MB, 100, "1MB-100B-chunks"),
        (MB, 4 * KB, "1MB-4KB-chunks"),
        (16 * MB, 64 * KB, "16MB-64KB-chunks"),
    ];

    for (total_size, chunk_size, name) in test_cases {
        let input = random_input(total_size);
        group.throughput(Throughput::Bytes(total_size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &(input, chunk_size),
            |b, (data, chunk_sz)| {
                b.iter(|| {
                    let mut hasher = b2hash::Hasher::new();
                    for chunk in data.chunks(*chunk_sz) {
                        hasher.update(black_box(chunk)).unwrap();
                    }
                    hasher.finalize()
                })
            },
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 4: BATCH THREAD SCALING
// =============================================================================

/// Multi-core scaling of `hash_batch` using Rayon (1 to N threads).
#[cfg(feature = "multithread")]
fn bench_thread_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("4-Batch-Thread-Scaling");
    group.sample_size(30);

    // 4096 messages of 4 KB each
    let inputs: Vec<Vec<u8>> = (0..4096).map(|_| random_input(4 * KB)).collect();
    group.throughput(Throughput::Bytes((inputs.len() * 4 * KB) as u64));

    let params = b2hash::Params::new().length(32);
    let max_threads = num_cpus::get();
    let thread_counts: Vec<usize> = [1, 2, 4, 8, 16, 32]
        .iter()
        .copied()
        .filter(|&t| t <= max_threads)
        .collect();

    for threads in thread_counts {
        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(format!("{}threads", threads)),
            &threads,
            |b, &t| {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(t)
                    .build()
                    .unwrap();
                pool.install(|| b.iter(|| b2hash::hash_batch(black_box(&inputs), &params)));
            },
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 5: SPECIAL OPERATIONS
// =============================================================================

/// Latency/Throughput for secondary features (keyed, salted, verification).
fn bench_special_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("5-Special-Operations");

    let size = 64 * KB;
    let input = random_input(size);
    let key = [42u8; 32];
    let salt = [7u8; 16];
    let personal = *b"bench-personal-1";
    group.throughput(Throughput::Bytes(size as u64));

    // Regular hash
    group.bench_function("regular-hash", |b| {
        b.iter(|| b2hash::hash(black_box(&input)))
    });

    // Keyed hash (MAC)
    group.bench_function("keyed-hash", |b| {
        b.iter(|| b2hash::hash_keyed(black_box(&input), black_box(&key)))
    });

    // Salted and personalized hash
    let params = b2hash::Params::new().salt(&salt).personal(&personal);
    group.bench_function("salted-personalized", |b| {
        b.iter(|| params.hash(black_box(&input)))
    });

    // Verification (constant-time)
    let hash = b2hash::hash(&input);
    group.bench_function("verify", |b| {
        b.iter(|| b2hash::verify(black_box(&input), black_box(hash.as_bytes())))
    });

    // MAC verification
    let mac = b2hash::hash_keyed(&input, &key).unwrap();
    group.bench_function("verify-mac", |b| {
        b.iter(|| b2hash::verify_mac(black_box(&input), black_box(&key), black_box(mac.as_bytes())))
    });

    // Sealed-box nonce (two 32-byte keys, one compression)
    let ephemeral = [1u8; 32];
    let recipient = [2u8; 32];
    group.bench_function("seal-nonce", |b| {
        b.iter(|| b2hash::seal_nonce(black_box(&ephemeral), black_box(&recipient)))
    });

    group.finish();
}

// =============================================================================
// MAIN
// =============================================================================

criterion_group!(
    benches,
    bench_latency,
    bench_files,
    bench_streaming,
    bench_special_operations,
);

#[cfg(feature = "multithread")]
criterion_group!(benches_multithread, bench_thread_scaling,);

#[cfg(feature = "multithread")]
criterion_main!(benches, benches_multithread);

#[cfg(not(feature = "multithread"))]
criterion_main!(benches);
