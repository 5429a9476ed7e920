//! Nonce Command
//!
//! Sealed-box nonce derivation from two public keys.

use anyhow::{Context, Result};
use b2hash::seal_nonce;
use tracing::debug;

/// Curve25519 public key size.
const PUBLIC_KEY_SIZE: usize = 32;

fn decode_public_key(name: &str, hex_str: &str) -> Result<[u8; PUBLIC_KEY_SIZE]> {
    let bytes = hex::decode(hex_str).with_context(|| format!("Invalid hex in {name} key"))?;
    let len = bytes.len();
    bytes
        .try_into()
        .map_err(|_| anyhow::anyhow!("{name} key must be {PUBLIC_KEY_SIZE} bytes, got {len}"))
}

/// Print `BLAKE2b-192(ephemeral || recipient)` in hex.
pub fn print_nonce(ephemeral: &str, recipient: &str) -> Result<()> {
    let ephemeral = decode_public_key("ephemeral", ephemeral)?;
    let recipient = decode_public_key("recipient", recipient)?;

    let nonce = seal_nonce(&ephemeral, &recipient);
    debug!(len = nonce.len(), "derived sealed-box nonce");
    println!("{}", hex::encode(nonce));
    Ok(())
}
