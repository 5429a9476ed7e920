use bolero::check;
use b2hash::{Params, ValidationError};

#[test]
fn fuzz_params_validation() {
    check!()
        .with_type::<(u8, Vec<u8>, Vec<u8>, Vec<u8>)>()
        .for_each(|(length, key, salt, personal)| {
            // =============================================================================
            // VALIDATION
            // =============================================================================

            let length = usize::from(*length);
            let params = Params::new()
                .length(length)
                .key(key)
                .salt(salt)
                .personal(personal);

            let expected = if length == 0 || length > 64 {
                Err(ValidationError::OutputLength(length))
            } else if key.len() > 64 {
                Err(ValidationError::KeyLength(key.len()))
            } else if salt.len() != 16 {
                Err(ValidationError::SaltLength(salt.len()))
            } else if personal.len() != 16 {
                Err(ValidationError::PersonalLength(personal.len()))
            } else {
                Ok(())
            };
            assert_eq!(params.validate(), expected, "Validation order mismatch");

            // =============================================================================
            // CONSTRUCTION
            // =============================================================================

            match params.to_hasher() {
                Ok(mut hasher) => {
                    assert!(expected.is_ok());
                    assert_eq!(hasher.output_len(), length);
                    assert_eq!(hasher.key_len(), key.len());
                    assert_eq!(hasher.finalize().len(), length);
                }
                Err(err) => assert_eq!(Err(err), expected),
            }
        });
}
