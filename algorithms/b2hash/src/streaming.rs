//! Streaming Hasher
//!
//! Incremental BLAKE2b with a single 128-byte pending block. A full block
//! stays buffered until more input arrives, because only the final block
//! may be compressed with the last-block flag.

use crate::engine::params::{ParameterBlock, Params};
use crate::kernels::constants::{BLOCK_SIZE, DEFAULT_OUTPUT_SIZE, MAX_KEY_SIZE, STATE_WORDS};
#[cfg(feature = "digest-trait")]
use crate::kernels::constants::MAX_OUTPUT_SIZE;
use crate::kernels::portable;
use crate::types::{Blake2bDigest, StateError, ValidationError};

#[cfg(feature = "digest-trait")]
use crypto_common::{Key, KeySizeUser};
#[cfg(feature = "digest-trait")]
use digest::typenum::U64;
#[cfg(feature = "digest-trait")]
use digest::Output;
#[cfg(feature = "digest-trait")]
use digest::{FixedOutput, HashMarker, KeyInit, OutputSizeUser, Reset, Update};

// =============================================================================
// STATE MACHINE
// =============================================================================

/// Hasher lifecycle. Updates are valid only while absorbing.
#[derive(Clone, Copy)]
enum Phase {
    Absorbing,
    Finalized(Blake2bDigest),
}

// =============================================================================
// STREAMING HASHER
// =============================================================================

/// Streaming BLAKE2b hasher.
///
/// Construct it, feed it with [`update`](Self::update) in chunks of any
/// size, then call [`finalize`](Self::finalize). Finalizing freezes the
/// hasher: the digest is cached and later updates fail with [`StateError`].
#[derive(Clone)]
pub struct Blake2bHasher {
    /// Chaining value
    h: [u64; STATE_WORDS],
    /// Pending block (never compressed until more input follows)
    buffer: [u8; BLOCK_SIZE],
    /// Fill cursor into `buffer`, 0..=128
    buffer_len: usize,
    /// Bytes fed to the compression function so far
    counter: u128,
    /// Requested digest length
    output_len: usize,
    /// Chaining value right after parameter setup (for `reset`)
    initial_h: [u64; STATE_WORDS],
    /// Zero-padded key (for `reset`)
    key: [u8; MAX_KEY_SIZE],
    /// Key length, 0 when unkeyed
    key_len: usize,
    phase: Phase,
}

impl Blake2bHasher {
    // =========================================================================
    // INITIALIZATION
    // =========================================================================

    /// Unkeyed hasher producing a 64-byte digest.
    #[must_use]
    pub fn new() -> Self {
        let block = ParameterBlock::encode(DEFAULT_OUTPUT_SIZE, 0, None, None);
        Self::from_parts(&block, &[])
    }

    /// Unkeyed hasher producing a `length`-byte digest.
    ///
    /// # Errors
    /// Returns [`ValidationError::OutputLength`] unless `1 <= length <= 64`.
    pub fn with_length(length: usize) -> Result<Self, ValidationError> {
        Params::new().length(length).to_hasher()
    }

    /// Keyed hasher (MAC mode) producing a `length`-byte digest.
    ///
    /// # Errors
    /// Returns [`ValidationError`] if the key exceeds 64 bytes or the length
    /// is out of range.
    pub fn new_keyed(key: &[u8], length: usize) -> Result<Self, ValidationError> {
        Params::new().length(length).key(key).to_hasher()
    }

    /// Assemble a hasher from an encoded parameter block and its key.
    ///
    /// `key` must already be validated and match the block's key length.
    pub(crate) fn from_parts(block: &ParameterBlock, key: &[u8]) -> Self {
        let initial_h = block.initial_state();
        let mut padded = [0u8; MAX_KEY_SIZE];
        padded[..key.len()].copy_from_slice(key);

        let mut hasher = Self {
            h: initial_h,
            buffer: [0u8; BLOCK_SIZE],
            buffer_len: 0,
            counter: 0,
            output_len: block.output_len(),
            initial_h,
            key: padded,
            key_len: key.len(),
            phase: Phase::Absorbing,
        };
        hasher.load_key_block();
        hasher
    }

    /// Queue the zero-padded key as a full pending block.
    fn load_key_block(&mut self) {
        if self.key_len > 0 {
            self.buffer = [0u8; BLOCK_SIZE];
            self.buffer[..MAX_KEY_SIZE].copy_from_slice(&self.key);
            self.buffer_len = BLOCK_SIZE;
        }
    }

    // =========================================================================
    // STATE MODIFICATION
    // =========================================================================

    /// Add data to the hasher. Text is hashed as its UTF-8 bytes.
    ///
    /// # Errors
    /// Returns [`StateError`] if the hasher has been finalized.
    pub fn update<T: AsRef<[u8]> + ?Sized>(&mut self, data: &T) -> Result<&mut Self, StateError> {
        if let Phase::Finalized(_) = self.phase {
            return Err(StateError);
        }
        self.absorb(data.as_ref());
        Ok(self)
    }

    /// Absorb input. Callers guarantee the hasher is still absorbing.
    pub(crate) fn absorb(&mut self, mut data: &[u8]) {
        if data.is_empty() {
            return;
        }

        // Top up the pending block; compress it only if input remains.
        if self.buffer_len > 0 {
            let take = (BLOCK_SIZE - self.buffer_len).min(data.len());
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&data[..take]);
            self.buffer_len += take;
            data = &data[take..];

            if data.is_empty() {
                return;
            }
            self.compress_buffer();
        }

        // Zero-copy path: whole blocks straight from the input, keeping at
        // least one byte back for the pending block.
        while data.len() > BLOCK_SIZE {
            let Some((block, rest)) = data.split_first_chunk::<BLOCK_SIZE>() else {
                break;
            };
            self.counter = self.counter.wrapping_add(BLOCK_SIZE as u128);
            portable::compress(&mut self.h, block, self.counter, false);
            data = rest;
        }

        self.buffer[..data.len()].copy_from_slice(data);
        self.buffer_len = data.len();
    }

    /// Compress the full pending block as a non-final block.
    fn compress_buffer(&mut self) {
        debug_assert_eq!(self.buffer_len, BLOCK_SIZE);
        self.counter = self.counter.wrapping_add(BLOCK_SIZE as u128);
        portable::compress(&mut self.h, &self.buffer, self.counter, false);
        self.buffer_len = 0;
    }

    /// Finalize and return the digest.
    ///
    /// The first call runs the last-block compression and freezes the
    /// hasher; every later call returns the same cached digest.
    pub fn finalize(&mut self) -> Blake2bDigest {
        if let Phase::Finalized(digest) = self.phase {
            return digest;
        }

        // Counter first, then padding.
        self.counter = self.counter.wrapping_add(self.buffer_len as u128);
        self.buffer[self.buffer_len..].fill(0);
        portable::compress(&mut self.h, &self.buffer, self.counter, true);

        let digest = Blake2bDigest::from_state(&self.h, self.output_len);
        self.phase = Phase::Finalized(digest);
        digest
    }

    /// Return to the freshly constructed state, keeping length and key.
    pub fn reset(&mut self) {
        self.h = self.initial_h;
        self.buffer = [0u8; BLOCK_SIZE];
        self.buffer_len = 0;
        self.counter = 0;
        self.phase = Phase::Absorbing;
        self.load_key_block();
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// Digest length in bytes.
    #[must_use]
    pub const fn output_len(&self) -> usize {
        self.output_len
    }

    /// Key length in bytes (0 when unkeyed).
    #[must_use]
    pub const fn key_len(&self) -> usize {
        self.key_len
    }

    /// Whether [`finalize`](Self::finalize) has been called.
    #[must_use]
    pub const fn is_finalized(&self) -> bool {
        matches!(self.phase, Phase::Finalized(_))
    }

    /// Bytes fed to the compression function so far (the `t` counter).
    #[must_use]
    pub const fn counter(&self) -> u128 {
        self.counter
    }

    /// Bytes waiting in the pending block.
    #[must_use]
    pub const fn buffered_len(&self) -> usize {
        self.buffer_len
    }
}

// =============================================================================
// TRAIT IMPL
// =============================================================================

impl Default for Blake2bHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Blake2bHasher {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // Chaining value and key are secret-dependent.
        f.debug_struct("Blake2bHasher")
            .field("output_len", &self.output_len)
            .field("key_len", &self.key_len)
            .field("counter", &self.counter)
            .field("buffered", &self.buffer_len)
            .field("finalized", &self.is_finalized())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// DIGEST TRAIT ADAPTER
// =============================================================================

/// Fixed 64-byte BLAKE2b for generic [`digest`] code.
///
/// `KeyInit` takes a full 64-byte key; use [`Blake2bHasher::new_keyed`] for
/// shorter keys or other output lengths.
#[cfg(feature = "digest-trait")]
#[derive(Clone, Default, Debug)]
pub struct Blake2b512(Blake2bHasher);

#[cfg(feature = "digest-trait")]
impl OutputSizeUser for Blake2b512 {
    type OutputSize = U64;
}

#[cfg(feature = "digest-trait")]
impl KeySizeUser for Blake2b512 {
    type KeySize = U64;
}

#[cfg(feature = "digest-trait")]
impl Update for Blake2b512 {
    fn update(&mut self, data: &[u8]) {
        // The inner hasher is only finalized by consuming `self`.
        self.0.absorb(data);
    }
}

#[cfg(feature = "digest-trait")]
impl FixedOutput for Blake2b512 {
    fn finalize_into(mut self, out: &mut Output<Self>) {
        let digest = self.0.finalize();
        out.copy_from_slice(digest.as_bytes());
    }
}

#[cfg(feature = "digest-trait")]
impl Reset for Blake2b512 {
    fn reset(&mut self) {
        self.0.reset();
    }
}

#[cfg(feature = "digest-trait")]
impl HashMarker for Blake2b512 {}

#[cfg(feature = "digest-trait")]
impl KeyInit for Blake2b512 {
    fn new(key: &Key<Self>) -> Self {
        let block = ParameterBlock::encode(MAX_OUTPUT_SIZE, MAX_KEY_SIZE, None, None);
        Self(Blake2bHasher::from_parts(&block, key.as_slice()))
    }
}
