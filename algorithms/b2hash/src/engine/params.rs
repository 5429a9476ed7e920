//! Parameter Block
//!
//! Builder for the BLAKE2b construction options and the encoded 64-byte
//! parameter block that seeds the chaining value.
//!
//! ```text
//! offset  0: digest length     offset  1: key length
//! offset  2: fanout (1)        offset  3: depth (1)
//! offset 32: salt (16 bytes)   offset 48: personalization (16 bytes)
//! ```
//!
//! Every other byte is zero (sequential mode).

use core::fmt;

use crate::kernels::constants::{
    DEFAULT_OUTPUT_SIZE, IV, MAX_KEY_SIZE, MAX_OUTPUT_SIZE, OFFSET_DEPTH, OFFSET_FANOUT,
    OFFSET_KEY_LEN, OFFSET_OUTPUT_LEN, OFFSET_PERSONAL, OFFSET_SALT, PARAM_BLOCK_SIZE,
    PERSONAL_SIZE, SALT_SIZE, STATE_WORDS,
};
use crate::kernels::portable::utils::load_param_words;
use crate::streaming::Blake2bHasher;
use crate::types::{Blake2bDigest, ValidationError};

// =============================================================================
// PARAMETER BLOCK
// =============================================================================

/// Encoded BLAKE2b parameter block. Immutable once built.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ParameterBlock {
    bytes: [u8; PARAM_BLOCK_SIZE],
}

impl ParameterBlock {
    /// Encode already-validated parameters.
    #[allow(clippy::cast_possible_truncation)] // lengths checked by `Params::validate`
    pub(crate) fn encode(
        output_len: usize,
        key_len: usize,
        salt: Option<&[u8]>,
        personal: Option<&[u8]>,
    ) -> Self {
        let mut bytes = [0u8; PARAM_BLOCK_SIZE];
        bytes[OFFSET_OUTPUT_LEN] = output_len as u8;
        bytes[OFFSET_KEY_LEN] = key_len as u8;
        bytes[OFFSET_FANOUT] = 1;
        bytes[OFFSET_DEPTH] = 1;
        if let Some(salt) = salt {
            bytes[OFFSET_SALT..OFFSET_SALT + SALT_SIZE].copy_from_slice(salt);
        }
        if let Some(personal) = personal {
            bytes[OFFSET_PERSONAL..OFFSET_PERSONAL + PERSONAL_SIZE].copy_from_slice(personal);
        }
        Self { bytes }
    }

    /// Raw encoded bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; PARAM_BLOCK_SIZE] {
        &self.bytes
    }

    /// Digest length recorded in the block.
    #[must_use]
    pub const fn output_len(&self) -> usize {
        self.bytes[OFFSET_OUTPUT_LEN] as usize
    }

    /// Key length recorded in the block.
    #[must_use]
    pub const fn key_len(&self) -> usize {
        self.bytes[OFFSET_KEY_LEN] as usize
    }

    /// Initial chaining value: `IV[i] ^ le_u64(block[8i..8i + 8])`.
    #[must_use]
    pub fn initial_state(&self) -> [u64; STATE_WORDS] {
        let words = load_param_words(&self.bytes);
        let mut h = IV;
        for (word, param) in h.iter_mut().zip(words) {
            *word ^= param;
        }
        h
    }
}

impl fmt::Debug for ParameterBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParameterBlock")
            .field("output_len", &self.output_len())
            .field("key_len", &self.key_len())
            .field("salt", &&self.bytes[OFFSET_SALT..OFFSET_SALT + SALT_SIZE])
            .field(
                "personal",
                &&self.bytes[OFFSET_PERSONAL..OFFSET_PERSONAL + PERSONAL_SIZE],
            )
            .finish()
    }
}

// =============================================================================
// BUILDER
// =============================================================================

/// Construction options for a BLAKE2b hasher.
///
/// Nothing is checked until [`Params::to_hasher`], [`Params::hash`] or
/// [`Params::parameter_block`] is called.
///
/// # Example
/// ```rust
/// use b2hash::Params;
///
/// let digest = Params::new()
///     .length(32)
///     .key(b"my secret key")
///     .personal(b"app-v1-tokens-01")
///     .hash(b"payload")?;
/// assert_eq!(digest.len(), 32);
/// # Ok::<(), b2hash::ValidationError>(())
/// ```
#[derive(Clone)]
pub struct Params<'a> {
    length: usize,
    key: Option<&'a [u8]>,
    salt: Option<&'a [u8]>,
    personal: Option<&'a [u8]>,
    data: Option<&'a [u8]>,
}

impl<'a> Params<'a> {
    /// Default options: 64-byte digest, no key, salt, personalization or data.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            length: DEFAULT_OUTPUT_SIZE,
            key: None,
            salt: None,
            personal: None,
            data: None,
        }
    }

    // =========================================================================
    // SETTERS
    // =========================================================================

    /// Digest length in bytes (1 to 64).
    #[must_use]
    pub const fn length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Key for keyed (MAC) mode, at most 64 bytes. An empty key means unkeyed.
    #[must_use]
    pub fn key<K: AsRef<[u8]> + ?Sized>(mut self, key: &'a K) -> Self {
        self.key = Some(key.as_ref());
        self
    }

    /// Salt, exactly 16 bytes.
    #[must_use]
    pub fn salt<S: AsRef<[u8]> + ?Sized>(mut self, salt: &'a S) -> Self {
        self.salt = Some(salt.as_ref());
        self
    }

    /// Personalization (domain separation tag), exactly 16 bytes.
    #[must_use]
    pub fn personal<P: AsRef<[u8]> + ?Sized>(mut self, personal: &'a P) -> Self {
        self.personal = Some(personal.as_ref());
        self
    }

    /// Input absorbed right after construction. Text is taken as UTF-8.
    #[must_use]
    pub fn data<D: AsRef<[u8]> + ?Sized>(mut self, data: &'a D) -> Self {
        self.data = Some(data.as_ref());
        self
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// Requested digest length.
    #[must_use]
    pub const fn output_len(&self) -> usize {
        self.length
    }

    /// Configured key length (0 when unkeyed).
    #[must_use]
    pub const fn key_len(&self) -> usize {
        match self.key {
            Some(key) => key.len(),
            None => 0,
        }
    }

    /// Configured salt, if any.
    #[must_use]
    pub const fn salt_bytes(&self) -> Option<&'a [u8]> {
        self.salt
    }

    /// Configured personalization, if any.
    #[must_use]
    pub const fn personal_bytes(&self) -> Option<&'a [u8]> {
        self.personal
    }

    // =========================================================================
    // CONSTRUCTION
    // =========================================================================

    /// Check every option against the BLAKE2b limits.
    ///
    /// # Errors
    /// Returns the first offending option as a [`ValidationError`].
    pub const fn validate(&self) -> Result<(), ValidationError> {
        if self.length == 0 || self.length > MAX_OUTPUT_SIZE {
            return Err(ValidationError::OutputLength(self.length));
        }
        if let Some(key) = self.key {
            if key.len() > MAX_KEY_SIZE {
                return Err(ValidationError::KeyLength(key.len()));
            }
        }
        if let Some(salt) = self.salt {
            if salt.len() != SALT_SIZE {
                return Err(ValidationError::SaltLength(salt.len()));
            }
        }
        if let Some(personal) = self.personal {
            if personal.len() != PERSONAL_SIZE {
                return Err(ValidationError::PersonalLength(personal.len()));
            }
        }
        Ok(())
    }

    /// Validate and encode the parameter block.
    ///
    /// # Errors
    /// Returns [`ValidationError`] if any option is out of range.
    pub fn parameter_block(&self) -> Result<ParameterBlock, ValidationError> {
        self.validate()?;
        Ok(ParameterBlock::encode(
            self.length,
            self.key_len(),
            self.salt,
            self.personal,
        ))
    }

    /// Build a hasher: encode the parameter block, absorb the key block (if
    /// any) and then the initial data (if any).
    ///
    /// # Errors
    /// Returns [`ValidationError`] if any option is out of range.
    pub fn to_hasher(&self) -> Result<Blake2bHasher, ValidationError> {
        let block = self.parameter_block()?;
        let mut hasher = Blake2bHasher::from_parts(&block, self.key.unwrap_or_default());
        if let Some(data) = self.data {
            hasher.absorb(data);
        }
        Ok(hasher)
    }

    /// One-shot: hash `input` with these options (after any initial data).
    ///
    /// # Errors
    /// Returns [`ValidationError`] if any option is out of range.
    pub fn hash<T: AsRef<[u8]> + ?Sized>(&self, input: &T) -> Result<Blake2bDigest, ValidationError> {
        let mut hasher = self.to_hasher()?;
        hasher.absorb(input.as_ref());
        Ok(hasher.finalize())
    }
}

impl Default for Params<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Params<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Key contents stay out of logs.
        f.debug_struct("Params")
            .field("length", &self.length)
            .field("key_len", &self.key.map(<[u8]>::len))
            .field("salt", &self.salt)
            .field("personal", &self.personal)
            .field("data_len", &self.data.map(<[u8]>::len))
            .finish()
    }
}
