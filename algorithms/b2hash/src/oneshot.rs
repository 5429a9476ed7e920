//! Public API Layer
//!
//! One-shot hashing, constant-time verification and sealed-box nonces.

use crate::engine::params::{ParameterBlock, Params};
use crate::kernels::constants::{MAX_OUTPUT_SIZE, PUBLIC_KEY_SIZE, SEAL_NONCE_SIZE};
use crate::streaming::Blake2bHasher;
use crate::types::{Blake2bDigest, ValidationError};
use subtle::ConstantTimeEq;

// =============================================================================
// GENERIC HASHING
// =============================================================================

/// Compute the unkeyed 64-byte BLAKE2b digest (BLAKE2b-512).
///
/// # Example
/// ```rust
/// let digest = b2hash::hash(b"abc");
/// assert_eq!(digest.len(), 64);
/// assert!(digest.to_string().starts_with("ba80a53f981c4d0d"));
/// ```
#[must_use]
#[inline]
pub fn hash(input: &[u8]) -> Blake2bDigest {
    let mut hasher = Blake2bHasher::new();
    hasher.absorb(input);
    hasher.finalize()
}

/// Compute an unkeyed digest of `length` bytes.
///
/// Shorter outputs are not prefixes of longer ones: the length is part of
/// the parameter block.
///
/// # Errors
/// Returns [`ValidationError::OutputLength`] unless `1 <= length <= 64`.
#[inline]
pub fn hash_with_length(input: &[u8], length: usize) -> Result<Blake2bDigest, ValidationError> {
    Params::new().length(length).hash(input)
}

/// Full hashing API with every construction option.
///
/// # Errors
/// Returns [`ValidationError`] if any option is out of range.
#[inline]
pub fn hash_with_params(input: &[u8], params: &Params<'_>) -> Result<Blake2bDigest, ValidationError> {
    params.hash(input)
}

// =============================================================================
// KEYED HASHING (MAC)
// =============================================================================

/// Keyed BLAKE2b-512 for message authentication.
///
/// # Example
/// ```rust
/// use b2hash::hash_keyed;
///
/// let key = [42u8; 32];
/// let mac = hash_keyed(b"message", &key)?;
/// assert!(b2hash::verify_mac(b"message", &key, mac.as_bytes()));
/// # Ok::<(), b2hash::ValidationError>(())
/// ```
///
/// # Errors
/// Returns [`ValidationError::KeyLength`] if the key exceeds 64 bytes.
pub fn hash_keyed(input: &[u8], key: &[u8]) -> Result<Blake2bDigest, ValidationError> {
    Params::new().key(key).hash(input)
}

// =============================================================================
// VERIFICATION
// =============================================================================

/// Verify an unkeyed digest in constant time.
///
/// The digest length is taken from `expected`; lengths outside `1..=64`
/// never verify.
///
/// # Example
/// ```rust
/// let data = b"Secure Data";
/// let digest = b2hash::hash(data);
/// assert!(b2hash::verify(data, digest.as_bytes()));
/// ```
#[must_use]
pub fn verify(input: &[u8], expected: &[u8]) -> bool {
    verify_with(&Params::new().length(expected.len()), input, expected)
}

/// Verify a MAC in constant time.
///
/// The MAC length is taken from `expected`; lengths outside `1..=64` and
/// keys longer than 64 bytes never verify.
#[must_use]
pub fn verify_mac(input: &[u8], key: &[u8], expected: &[u8]) -> bool {
    verify_with(&Params::new().length(expected.len()).key(key), input, expected)
}

fn verify_with(params: &Params<'_>, input: &[u8], expected: &[u8]) -> bool {
    if expected.is_empty() || expected.len() > MAX_OUTPUT_SIZE {
        return false;
    }
    params
        .hash(input)
        .is_ok_and(|computed| computed.as_bytes().ct_eq(expected).into())
}

// =============================================================================
// SEALED-BOX NONCE
// =============================================================================

/// Derive the 24-byte sealed-box nonce from two Curve25519 public keys.
///
/// `nonce = BLAKE2b-192(ephemeral_pk || recipient_pk)`, the construction
/// anonymous public-key sealing uses to bind the nonce to both keys.
///
/// # Example
/// ```rust
/// let ephemeral = [1u8; 32];
/// let recipient = [2u8; 32];
/// let nonce = b2hash::seal_nonce(&ephemeral, &recipient);
/// assert_eq!(nonce.len(), 24);
/// ```
#[must_use]
pub fn seal_nonce(
    ephemeral_pk: &[u8; PUBLIC_KEY_SIZE],
    recipient_pk: &[u8; PUBLIC_KEY_SIZE],
) -> [u8; SEAL_NONCE_SIZE] {
    let block = ParameterBlock::encode(SEAL_NONCE_SIZE, 0, None, None);
    let mut hasher = Blake2bHasher::from_parts(&block, &[]);
    hasher.absorb(ephemeral_pk);
    hasher.absorb(recipient_pk);

    let mut nonce = [0u8; SEAL_NONCE_SIZE];
    nonce.copy_from_slice(hasher.finalize().as_bytes());
    nonce
}
