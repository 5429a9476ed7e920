//! Batch Execution Engine
//!
//! Hashes many independent messages under one set of parameters:
//! 1. Validation and key setup happen once, in a template hasher
//! 2. Each message gets its own clone of the template
//! 3. Messages are hashed in parallel via Rayon if `multithread` is enabled,
//!    otherwise serially
//!
//! Output order always matches input order.

use crate::engine::params::Params;
use crate::streaming::Blake2bHasher;
use crate::types::{Blake2bDigest, ValidationError};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// =============================================================================
// BATCH HASHING
// =============================================================================

/// Hash every input with the same parameters.
///
/// Initial data configured with [`Params::data`] is absorbed before each
/// input, so it acts as a shared prefix.
///
/// # Example
/// ```rust
/// use b2hash::{hash_batch, Params};
///
/// let inputs: [&[u8]; 3] = [b"alpha", b"beta", b"gamma"];
/// let digests = hash_batch(&inputs, &Params::new().length(32))?;
/// assert_eq!(digests.len(), 3);
/// assert_eq!(digests[1], b2hash::hash_with_length(b"beta", 32)?);
/// # Ok::<(), b2hash::ValidationError>(())
/// ```
///
/// # Errors
/// Returns [`ValidationError`] if any option is out of range.
pub fn hash_batch<T>(inputs: &[T], params: &Params<'_>) -> Result<Vec<Blake2bDigest>, ValidationError>
where
    T: AsRef<[u8]> + Sync,
{
    let template = params.to_hasher()?;
    Ok(inputs.process_each(|input| {
        let mut hasher = template.clone();
        hasher.absorb(input.as_ref());
        hasher.finalize()
    }))
}

/// Helper for feature-agnostic per-item processing
trait BatchProcessor<T> {
    fn process_each<F, R>(self, f: F) -> Vec<R>
    where
        F: Fn(&T) -> R + Sync + Send,
        R: Send;
}

impl<T: Sync> BatchProcessor<T> for &[T] {
    fn process_each<F, R>(self, f: F) -> Vec<R>
    where
        F: Fn(&T) -> R + Sync + Send,
        R: Send,
    {
        #[cfg(feature = "multithread")]
        {
            use rayon::prelude::*;
            self.par_iter().map(f).collect()
        }
        #[cfg(not(feature = "multithread"))]
        {
            self.iter().map(f).collect()
        }
    }
}

// Template clones cross threads.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Blake2bHasher>();
};
