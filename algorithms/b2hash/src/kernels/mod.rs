//! Compression Kernels
//!
//! The BLAKE2b `F` function and the constants it is built from.

pub mod constants;
pub mod portable;
