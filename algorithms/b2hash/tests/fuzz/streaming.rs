use bolero::check;
use b2hash::{hash, Hasher, Params};

#[test]
fn fuzz_streaming_consistency() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        // =============================================================================
        // BASELINE (ONE-SHOT)
        // =============================================================================
        let expected = hash(data);

        // =============================================================================
        // STREAMING VARIATIONS
        // =============================================================================

        // 1. Single Update
        let mut hasher = Hasher::new();
        if hasher.update(data).is_ok() {
            assert_eq!(hasher.finalize(), expected, "Streaming single update mismatch");
        }

        // 2. Byte-by-Byte (Small Inputs Only)
        if data.len() < 512 {
            let mut hasher = Hasher::new();
            for b in data {
                assert!(hasher.update(&[*b]).is_ok());
            }
            assert_eq!(hasher.finalize(), expected, "Byte-by-byte streaming mismatch");
        }

        // 3. Arbitrary Split Points
        if data.len() > 1 {
            for split_idx in [1, data.len() / 2, data.len() - 1] {
                let mut hasher = Hasher::new();
                let (first, second) = data.split_at(split_idx);
                assert!(hasher.update(first).is_ok());
                assert!(hasher.update(second).is_ok());
                assert_eq!(hasher.finalize(), expected, "Split at {split_idx} mismatch");
            }
        }

        // 4. Construction Data
        if let Ok(mut hasher) = Params::new().data(data).to_hasher() {
            assert_eq!(hasher.finalize(), expected, "Construction data mismatch");
        }
    });
}

#[test]
fn fuzz_finalize_freezes() {
    check!()
        .with_type::<(Vec<u8>, Vec<u8>)>()
        .for_each(|(first, second)| {
            let mut hasher = Hasher::new();
            assert!(hasher.update(first).is_ok());
            let digest = hasher.finalize();

            assert!(hasher.update(second).is_err(), "Update accepted after finalize");
            assert_eq!(hasher.finalize(), digest, "Cached digest changed");
        });
}
