//! b2hash Basic Example
//!
//! Minimal usage: `let digest = b2hash::hash(&data);`

#![allow(clippy::pedantic, clippy::nursery)]

use b2hash::{Hasher, Params};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Zero boilerplate:
    let data = b"Hello, World!";
    let digest = b2hash::hash(data);

    println!("Data:     {:?}", String::from_utf8_lossy(data));
    println!("Hash:     {digest}");

    // Shorter digest, streamed:
    let mut hasher = Hasher::with_length(32)?;
    hasher.update("Hello, ")?.update("World!")?;
    println!("Hash-256: {}", hasher.finalize());

    // MAC with a domain tag:
    let tag = Params::new()
        .length(16)
        .key(b"example key")
        .personal(b"example-app-v1\0\0")
        .hash(data)?;
    println!("MAC-128:  {tag}");

    Ok(())
}
