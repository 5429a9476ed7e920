//! Shared types used across the b2hash library.

use core::fmt;
#[cfg(feature = "std")]
use std::error;

use subtle::{Choice, ConstantTimeEq};

use crate::kernels::constants::{MAX_KEY_SIZE, MAX_OUTPUT_SIZE, PERSONAL_SIZE, SALT_SIZE};
use crate::kernels::portable::utils::store_state;

// =============================================================================
// DIGEST
// =============================================================================

/// A finalized BLAKE2b digest of 1 to 64 bytes.
///
/// Stored inline, so it is `Copy` and needs no allocation. Equality is
/// constant time.
#[derive(Clone, Copy)]
pub struct Blake2bDigest {
    bytes: [u8; MAX_OUTPUT_SIZE],
    len: u8,
}

impl Blake2bDigest {
    /// Serialize a chaining value, keeping the first `len` bytes.
    #[allow(clippy::cast_possible_truncation)] // len <= 64
    pub(crate) fn from_state(h: &[u64; 8], len: usize) -> Self {
        let mut bytes = [0u8; MAX_OUTPUT_SIZE];
        store_state(h, &mut bytes[..len]);
        Self {
            bytes,
            len: len as u8,
        }
    }

    /// Digest bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..usize::from(self.len)]
    }

    /// Digest length in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Always `false`: a digest holds at least one byte.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Copy the digest into an owned vector.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

impl AsRef<[u8]> for Blake2bDigest {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl ConstantTimeEq for Blake2bDigest {
    fn ct_eq(&self, other: &Self) -> Choice {
        // Length is public; only the contents need constant-time comparison.
        self.as_bytes().ct_eq(other.as_bytes())
    }
}

impl PartialEq for Blake2bDigest {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Blake2bDigest {}

impl PartialEq<[u8]> for Blake2bDigest {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes().ct_eq(other).into()
    }
}

impl fmt::LowerHex for Blake2bDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.as_bytes() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Blake2bDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Blake2bDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Blake2bDigest({self:x})")
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Invalid construction parameter.
///
/// Each variant carries the rejected length in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Digest length outside `1..=64`.
    OutputLength(usize),
    /// Key longer than 64 bytes.
    KeyLength(usize),
    /// Salt not exactly 16 bytes.
    SaltLength(usize),
    /// Personalization not exactly 16 bytes.
    PersonalLength(usize),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::OutputLength(len) => write!(
                f,
                "invalid digest length {len}: must be between 1 and {MAX_OUTPUT_SIZE} bytes"
            ),
            Self::KeyLength(len) => write!(
                f,
                "invalid key length {len}: must be at most {MAX_KEY_SIZE} bytes"
            ),
            Self::SaltLength(len) => write!(
                f,
                "invalid salt length {len}: must be exactly {SALT_SIZE} bytes"
            ),
            Self::PersonalLength(len) => write!(
                f,
                "invalid personalization length {len}: must be exactly {PERSONAL_SIZE} bytes"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for ValidationError {}

/// Update attempted on a hasher that has already been finalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateError;

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("hasher is finalized; construct or reset it before updating")
    }
}

#[cfg(feature = "std")]
impl error::Error for StateError {}
