//! BLAKE2b Constants
//!
//! The initialization vector is the SHA-512 IV: the first 64 bits of the
//! fractional parts of the square roots of the first eight primes.
//!
//! ```text
//! IV[i] = floor(frac(sqrt(p_i)) * 2^64),  p = 2, 3, 5, 7, 11, 13, 17, 19
//! ```
//!
//! The sigma schedule is shared by every BLAKE2 variant. BLAKE2b runs 12
//! rounds, so rows 0 and 1 are reused for rounds 10 and 11.

// =============================================================================
// ROUNDS
// =============================================================================

/// Number of mixing rounds per compression.
pub const ROUNDS: usize = 12;

// =============================================================================
// STRUCTURAL CONSTANTS
// =============================================================================

/// Compression block size (in bytes).
pub const BLOCK_SIZE: usize = 128;

/// Size of the encoded parameter block (in bytes).
pub const PARAM_BLOCK_SIZE: usize = 64;

/// Number of 64-bit words in the chaining value.
pub const STATE_WORDS: usize = 8;

/// Number of 64-bit message words per block.
pub const MESSAGE_WORDS: usize = 16;

// =============================================================================
// PARAMETER LIMITS
// =============================================================================

/// Largest digest BLAKE2b can produce (in bytes).
pub const MAX_OUTPUT_SIZE: usize = 64;

/// Digest length used when none is requested.
pub const DEFAULT_OUTPUT_SIZE: usize = MAX_OUTPUT_SIZE;

/// Longest accepted key (in bytes).
pub const MAX_KEY_SIZE: usize = 64;

/// Exact salt length (in bytes).
pub const SALT_SIZE: usize = 16;

/// Exact personalization length (in bytes).
pub const PERSONAL_SIZE: usize = 16;

// =============================================================================
// PARAMETER BLOCK LAYOUT
// =============================================================================

/// Byte offset of the digest length.
pub const OFFSET_OUTPUT_LEN: usize = 0;
/// Byte offset of the key length.
pub const OFFSET_KEY_LEN: usize = 1;
/// Byte offset of the fanout (always 1, sequential mode).
pub const OFFSET_FANOUT: usize = 2;
/// Byte offset of the maximal depth (always 1, sequential mode).
pub const OFFSET_DEPTH: usize = 3;
/// Byte offset of the salt.
pub const OFFSET_SALT: usize = 32;
/// Byte offset of the personalization.
pub const OFFSET_PERSONAL: usize = 48;

// =============================================================================
// SEALED-BOX NONCE
// =============================================================================

/// Curve25519 public key length (in bytes).
pub const PUBLIC_KEY_SIZE: usize = 32;

/// Nonce length of the XSalsa20-Poly1305 box (in bytes).
pub const SEAL_NONCE_SIZE: usize = 24;

// =============================================================================
// INITIALIZATION VECTOR
// =============================================================================

/// BLAKE2b initialization vector.
pub const IV: [u64; STATE_WORDS] = [
    0x6A09_E667_F3BC_C908, // sqrt(2)
    0xBB67_AE85_84CA_A73B, // sqrt(3)
    0x3C6E_F372_FE94_F82B, // sqrt(5)
    0xA54F_F53A_5F1D_36F1, // sqrt(7)
    0x510E_527F_ADE6_82D1, // sqrt(11)
    0x9B05_688C_2B3E_6C1F, // sqrt(13)
    0x1F83_D9AB_FB41_BD6B, // sqrt(17)
    0x5BE0_CD19_137E_2179, // sqrt(19)
];

// =============================================================================
// MESSAGE SCHEDULE
// =============================================================================

/// Message word permutation for each round.
#[rustfmt::skip]
pub const SIGMA: [[usize; MESSAGE_WORDS]; ROUNDS] = [
    [ 0,  1,  2,  3,  4,  5,  6,  7,  8,  9, 10, 11, 12, 13, 14, 15],
    [14, 10,  4,  8,  9, 15, 13,  6,  1, 12,  0,  2, 11,  7,  5,  3],
    [11,  8, 12,  0,  5,  2, 15, 13, 10, 14,  3,  6,  7,  1,  9,  4],
    [ 7,  9,  3,  1, 13, 12, 11, 14,  2,  6,  5, 10,  4,  0, 15,  8],
    [ 9,  0,  5,  7,  2,  4, 10, 15, 14,  1, 11, 12,  6,  8,  3, 13],
    [ 2, 12,  6, 10,  0, 11,  8,  3,  4, 13,  7,  5, 15, 14,  1,  9],
    [12,  5,  1, 15, 14, 13,  4, 10,  0,  7,  6,  3,  9,  2,  8, 11],
    [13, 11,  7, 14, 12,  1,  3,  9,  5,  0, 15,  4,  8,  6,  2, 10],
    [ 6, 15, 14,  9, 11,  3,  0,  8, 12,  2, 13,  7,  1,  4, 10,  5],
    [10,  2,  8,  4,  7,  6,  1,  5, 15, 11,  9, 14,  3, 12, 13,  0],
    [ 0,  1,  2,  3,  4,  5,  6,  7,  8,  9, 10, 11, 12, 13, 14, 15],
    [14, 10,  4,  8,  9, 15, 13,  6,  1, 12,  0,  2, 11,  7,  5,  3],
];

// =============================================================================
// G ROTATIONS
// =============================================================================

/// Rotation amounts used by `G`, in application order.
pub const R1: u32 = 32;
/// Second `G` rotation.
pub const R2: u32 = 24;
/// Third `G` rotation.
pub const R3: u32 = 16;
/// Fourth `G` rotation.
pub const R4: u32 = 63;
