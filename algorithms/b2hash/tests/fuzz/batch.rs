use bolero::check;
use b2hash::{hash_batch, Params};

#[test]
fn fuzz_batch_consistency() {
    check!()
        .with_type::<(Vec<Vec<u8>>, u8)>()
        .for_each(|(inputs, length)| {
            // =============================================================================
            // BATCH EXECUTION (RAYON)
            // =============================================================================

            let length = usize::from(*length % 64) + 1;
            let params = Params::new().length(length);
            let Ok(digests) = hash_batch(inputs, &params) else {
                panic!("valid length {length} rejected");
            };

            // =============================================================================
            // SEQUENTIAL REFERENCE
            // =============================================================================

            assert_eq!(digests.len(), inputs.len(), "Batch dropped inputs");
            for (input, digest) in inputs.iter().zip(&digests) {
                assert_eq!(
                    Ok(*digest),
                    params.hash(input),
                    "Batch and one-shot differ (length {length})"
                );
            }
        });
}
