#![no_main]

use b2hash::{hash_keyed, verify_mac, Params};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // =============================================================================
    // PREPARATION
    // =============================================================================

    // Layout: [length, key_len, key.., salt(16), personal(16), message..]
    if data.len() < 2 {
        return;
    }
    let length = usize::from(data[0] % 64) + 1;
    let key_len = usize::from(data[1] % 65);
    let rest = &data[2..];
    if rest.len() < key_len + 32 {
        return;
    }
    let (key, rest) = rest.split_at(key_len);
    let (salt, rest) = rest.split_at(16);
    let (personal, msg) = rest.split_at(16);

    // =============================================================================
    // 1. FULL PARAMETER SET
    // =============================================================================

    let params = Params::new()
        .length(length)
        .key(key)
        .salt(salt)
        .personal(personal);

    let Ok(digest) = params.hash(msg) else {
        panic!("valid parameters rejected: {params:?}");
    };
    assert_eq!(digest.len(), length, "Digest length mismatch");

    let Ok(mut hasher) = params.to_hasher() else {
        panic!("valid parameters rejected: {params:?}");
    };
    for chunk in msg.chunks(usize::from(data[0]) + 1) {
        assert!(hasher.update(chunk).is_ok());
    }
    assert_eq!(hasher.finalize(), digest, "Streaming and one-shot differ");

    // =============================================================================
    // 2. KEYED HASHING (MAC)
    // =============================================================================

    let Ok(mac) = hash_keyed(msg, key) else {
        panic!("key of {key_len} bytes rejected");
    };
    assert!(
        verify_mac(msg, key, mac.as_bytes()),
        "MAC verification failed with correct key"
    );

    if key_len > 0 {
        let mut wrong_key = key.to_vec();
        wrong_key[0] ^= 0xFF;
        assert!(
            !verify_mac(msg, &wrong_key, mac.as_bytes()),
            "MAC verification succeeded with wrong key"
        );
    }
});
