//! Hash Command
//!
//! File hashing with automatic parallelization via Rayon.

use anyhow::{Context, Result};
use b2hash::{Blake2bDigest, Params};
use rayon::prelude::*;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read buffer per file.
const READ_BUFFER_SIZE: usize = 128 * 1024;

// =============================================================================
// OPTIONS
// =============================================================================

/// Decoded construction options shared by every file.
pub struct HashOptions {
    length: usize,
    key: Option<Vec<u8>>,
    salt: Option<Vec<u8>>,
    personal: Option<Vec<u8>>,
}

impl HashOptions {
    /// Decode the hex arguments and validate them once up front.
    pub fn from_hex(
        length: usize,
        key: Option<&str>,
        salt: Option<&str>,
        personal: Option<&str>,
    ) -> Result<Self> {
        let decode = |name: &str, value: Option<&str>| -> Result<Option<Vec<u8>>> {
            value
                .map(|hex_str| {
                    hex::decode(hex_str).with_context(|| format!("Invalid hex in --{name}"))
                })
                .transpose()
        };

        let options = Self {
            length,
            key: decode("key", key)?,
            salt: decode("salt", salt)?,
            personal: decode("personal", personal)?,
        };
        options.params(length).validate()?;
        Ok(options)
    }

    /// Builder for a digest of `length` bytes with these options.
    pub fn params(&self, length: usize) -> Params<'_> {
        let mut params = Params::new().length(length);
        if let Some(key) = &self.key {
            params = params.key(key);
        }
        if let Some(salt) = &self.salt {
            params = params.salt(salt);
        }
        if let Some(personal) = &self.personal {
            params = params.personal(personal);
        }
        params
    }

    /// Digest length requested on the command line.
    pub const fn length(&self) -> usize {
        self.length
    }
}

// =============================================================================
// HASHING
// =============================================================================

/// Stream one file through a hasher built from `params`.
pub fn hash_file(path: &Path, params: &Params<'_>) -> Result<Blake2bDigest> {
    let mut file =
        File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;

    let mut hasher = params.to_hasher()?;
    let mut buffer = vec![0u8; READ_BUFFER_SIZE];
    let mut total: u64 = 0;

    loop {
        let n = file
            .read(&mut buffer)
            .with_context(|| format!("Failed to read: {}", path.display()))?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n])?;
        total += n as u64;
    }

    debug!(path = %path.display(), bytes = total, ?params, "hashed file");
    Ok(hasher.finalize())
}

/// Hash files in parallel and print `<hex>  <path>` in argument order.
pub fn hash_files(files: &[PathBuf], options: &HashOptions) -> Result<()> {
    let params = options.params(options.length());

    let results: Vec<(&PathBuf, Result<Blake2bDigest>)> = files
        .par_iter()
        .map(|file_path| (file_path, hash_file(file_path, &params)))
        .collect();

    let mut failed = 0usize;
    for (file_path, result) in results {
        match result {
            Ok(digest) => println!("{digest}  {}", file_path.display()),
            Err(e) => {
                eprintln!("Error: {}: {e:#}", file_path.display());
                failed += 1;
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("Failed to hash {failed} file(s)");
    }

    Ok(())
}
