//! CLI Commands
//!
//! All b2hash CLI commands organized as separate modules.

mod check;
mod hash;
mod nonce;

pub use check::check_mode;
pub use hash::{hash_files, HashOptions};
pub use nonce::print_nonce;
