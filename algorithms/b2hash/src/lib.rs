#![cfg_attr(not(feature = "std"), no_std)]

//! # b2hash
//!
//! Streaming BLAKE2b (RFC 7693): keyed and unkeyed, salted and
//! personalized, with any digest length from 1 to 64 bytes.

//! # Usage
//! ```rust
//! use b2hash::{Hasher, Params};
//!
//! // 1. One-shot Hashing
//! let digest = b2hash::hash(b"Performance Matters");
//! println!("{digest}");
//!
//! // 2. Secure Verification
//! let valid = b2hash::verify(b"Performance Matters", digest.as_bytes());
//! assert!(valid);
//!
//! // 3. Streaming (Big Data / Files)
//! let mut hasher = Hasher::new();
//! hasher.update(b"Chunk 1")?.update("Chunk 2")?;
//! let streamed = hasher.finalize();
//!
//! // 4. Every Option
//! let tag = Params::new()
//!     .length(24)
//!     .key(b"secret")
//!     .salt(b"0123456789abcdef")
//!     .personal(b"my-app-v1-nonces")
//!     .hash(b"message")?;
//! assert_eq!(tag.len(), 24);
//! # let _ = streamed;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

#[cfg(not(feature = "std"))]
extern crate alloc;

mod engine;
// Raw compression function, reachable from the comparison benches.
#[doc(hidden)]
pub mod kernels;
mod oneshot;
mod streaming;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

#[cfg(feature = "digest-trait")]
pub use digest;
pub use engine::batch::hash_batch;
pub use engine::params::{ParameterBlock, Params};
pub use kernels::constants::{
    BLOCK_SIZE, MAX_KEY_SIZE, MAX_OUTPUT_SIZE, PERSONAL_SIZE, SALT_SIZE, SEAL_NONCE_SIZE,
};
pub use oneshot::{
    hash, hash_keyed, hash_with_length, hash_with_params, seal_nonce, verify, verify_mac,
};
#[cfg(feature = "digest-trait")]
pub use streaming::Blake2b512;
pub use streaming::Blake2bHasher as Hasher;
pub use types::{Blake2bDigest, StateError, ValidationError};
