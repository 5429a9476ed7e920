use bolero::check;
use b2hash::{hash, hash_keyed, verify, verify_mac};

#[test]
fn fuzz_verification_logic() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        // =============================================================================
        // POSITIVE TEST
        // =============================================================================

        let h = hash(data);
        assert!(verify(data, h.as_bytes()), "verify() failed on correct data");

        // =============================================================================
        // NEGATIVE TESTS (CORRUPTION)
        // =============================================================================

        // 1. Data Corruption
        if !data.is_empty() {
            let mut corrupted_data = data.clone();
            corrupted_data[0] ^= 0x01;
            assert!(
                !verify(&corrupted_data, h.as_bytes()),
                "verify() succeeded on corrupted data"
            );
        }

        // 2. Hash Corruption
        let mut bad_h = h.to_vec();
        bad_h[0] ^= 0xFF; // Flip influential bits

        assert!(
            !verify(data, &bad_h),
            "verify() succeeded on corrupted hash"
        );
    });
}

#[test]
fn fuzz_mac_verification() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        // Leading bytes (up to 64) double as the key.
        let split = data.len().min(64);
        let (key, msg) = data.split_at(split);

        let Ok(mac) = hash_keyed(msg, key) else {
            panic!("key of {} bytes rejected", key.len());
        };
        assert!(
            verify_mac(msg, key, mac.as_bytes()),
            "MAC verification failed with correct key"
        );

        if !key.is_empty() {
            let mut wrong_key = key.to_vec();
            wrong_key[0] ^= 0xFF;
            assert!(
                !verify_mac(msg, &wrong_key, mac.as_bytes()),
                "MAC verification succeeded with wrong key"
            );
        }
    });
}
