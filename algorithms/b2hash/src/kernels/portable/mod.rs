//! Portable implementation of the BLAKE2b compression function.
//!
//! Plain `u64` wrapping arithmetic. Every state, message and working-vector
//! word is a native 64-bit lane, so no carry propagation between halves is
//! needed.

use crate::kernels::constants::{BLOCK_SIZE, IV, MESSAGE_WORDS, R1, R2, R3, R4, SIGMA, STATE_WORDS};

pub(crate) mod utils;

/// Working vector width: chaining value followed by the IV.
const WORK_WORDS: usize = 2 * STATE_WORDS;

// =============================================================================
// MIXING
// =============================================================================

/// The `G` mixing function on four lanes of the working vector.
#[allow(clippy::inline_always)]
#[inline(always)]
fn g(v: &mut [u64; WORK_WORDS], a: usize, b: usize, c: usize, d: usize, x: u64, y: u64) {
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(x);
    v[d] = (v[d] ^ v[a]).rotate_right(R1);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(R2);
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(y);
    v[d] = (v[d] ^ v[a]).rotate_right(R3);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(R4);
}

/// One round: four column steps, then four diagonal steps.
#[allow(clippy::inline_always)]
#[inline(always)]
fn round(v: &mut [u64; WORK_WORDS], m: &[u64; MESSAGE_WORDS], s: &[usize; MESSAGE_WORDS]) {
    // Columns
    g(v, 0, 4, 8, 12, m[s[0]], m[s[1]]);
    g(v, 1, 5, 9, 13, m[s[2]], m[s[3]]);
    g(v, 2, 6, 10, 14, m[s[4]], m[s[5]]);
    g(v, 3, 7, 11, 15, m[s[6]], m[s[7]]);

    // Diagonals
    g(v, 0, 5, 10, 15, m[s[8]], m[s[9]]);
    g(v, 1, 6, 11, 12, m[s[10]], m[s[11]]);
    g(v, 2, 7, 8, 13, m[s[12]], m[s[13]]);
    g(v, 3, 4, 9, 14, m[s[14]], m[s[15]]);
}

// =============================================================================
// COMPRESSION
// =============================================================================

/// Mix one 128-byte block into the chaining value `h`.
///
/// `counter` is the total number of bytes fed to the compression function
/// including this block. `last` marks the final block of the message.
#[allow(clippy::cast_possible_truncation)] // Counter split into t0/t1 words
pub fn compress(h: &mut [u64; STATE_WORDS], block: &[u8; BLOCK_SIZE], counter: u128, last: bool) {
    let m = utils::load_message(block);

    let mut v = [0u64; WORK_WORDS];
    v[..STATE_WORDS].copy_from_slice(h);
    v[STATE_WORDS..].copy_from_slice(&IV);

    v[12] ^= counter as u64;
    v[13] ^= (counter >> 64) as u64;
    if last {
        v[14] = !v[14];
    }

    for s in &SIGMA {
        round(&mut v, &m, s);
    }

    for (i, word) in h.iter_mut().enumerate() {
        *word ^= v[i] ^ v[i + STATE_WORDS];
    }
}
