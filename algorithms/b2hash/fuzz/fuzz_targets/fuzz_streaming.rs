#![no_main]

use b2hash::Hasher;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // Reference: one-shot over the whole input.
    let reference_hash = b2hash::hash(data);

    // Chunk size is derived from the first byte (1 to 256)
    let chunk_size = usize::from(data[0]) + 1;

    let mut hasher = Hasher::new();
    for chunk in data.chunks(chunk_size) {
        if hasher.update(chunk).is_err() {
            panic!("update rejected before finalize");
        }
    }

    let streaming_hash = hasher.finalize();

    // They must be identical
    assert_eq!(
        reference_hash, streaming_hash,
        "Streaming and One-Shot approaches differ!"
    );
    assert!(hasher.update(data).is_err(), "update accepted after finalize");
});
