//! Little-endian word conversion for the portable kernel.

use crate::kernels::constants::{BLOCK_SIZE, MESSAGE_WORDS, PARAM_BLOCK_SIZE, STATE_WORDS};

/// Load the 16 message words of a block (little-endian).
#[allow(clippy::inline_always)]
#[inline(always)]
pub fn load_message(block: &[u8; BLOCK_SIZE]) -> [u64; MESSAGE_WORDS] {
    let (words, _) = block.as_chunks::<8>();
    let mut m = [0u64; MESSAGE_WORDS];
    for (dst, src) in m.iter_mut().zip(words) {
        *dst = u64::from_le_bytes(*src);
    }
    m
}

/// Load the 8 words of an encoded parameter block (little-endian).
#[inline]
pub fn load_param_words(block: &[u8; PARAM_BLOCK_SIZE]) -> [u64; STATE_WORDS] {
    let (words, _) = block.as_chunks::<8>();
    let mut p = [0u64; STATE_WORDS];
    for (dst, src) in p.iter_mut().zip(words) {
        *dst = u64::from_le_bytes(*src);
    }
    p
}

/// Serialize the chaining value little-endian into `out`, truncated to
/// `out.len()` bytes (at most 64).
#[inline]
pub fn store_state(h: &[u64; STATE_WORDS], out: &mut [u8]) {
    for (dst, word) in out.chunks_mut(8).zip(h) {
        let bytes = word.to_le_bytes();
        dst.copy_from_slice(&bytes[..dst.len()]);
    }
}
