//! b2hash CLI
//!
//! BLAKE2b checksums, MACs and sealed-box nonces from the command line.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use commands::{check_mode, hash_files, print_nonce, HashOptions};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "b2hash")]
#[command(about = "BLAKE2b (RFC 7693) checksums and MACs", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Files to hash (if no subcommand)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    #[command(flatten)]
    options: HashArgs,

    /// Log per-file details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Args)]
struct HashArgs {
    /// Digest length in bytes (1 to 64)
    #[arg(short, long, global = true, default_value_t = b2hash::MAX_OUTPUT_SIZE)]
    length: usize,

    /// Key for keyed (MAC) mode, hex encoded, at most 64 bytes
    #[arg(short, long, global = true, value_name = "HEX")]
    key: Option<String>,

    /// Salt, hex encoded, exactly 16 bytes
    #[arg(long, global = true, value_name = "HEX")]
    salt: Option<String>,

    /// Personalization, hex encoded, exactly 16 bytes
    #[arg(long, global = true, value_name = "HEX")]
    personal: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify checksums from file (like sha256sum -c)
    Check {
        #[arg(value_name = "FILE")]
        checksum_file: PathBuf,
    },
    /// Derive the sealed-box nonce from two hex-encoded public keys
    Nonce {
        /// Ephemeral public key (32 bytes, hex)
        #[arg(value_name = "EPHEMERAL_PK")]
        ephemeral: String,
        /// Recipient public key (32 bytes, hex)
        #[arg(value_name = "RECIPIENT_PK")]
        recipient: String,
    },
}

impl HashArgs {
    fn decode(&self) -> Result<HashOptions> {
        HashOptions::from_hex(
            self.length,
            self.key.as_deref(),
            self.salt.as_deref(),
            self.personal.as_deref(),
        )
    }
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Some(Commands::Check { checksum_file }) => {
            let options = cli.options.decode()?;
            if !check_mode(checksum_file, &options)? {
                std::process::exit(1);
            }
        }
        Some(Commands::Nonce {
            ephemeral,
            recipient,
        }) => print_nonce(ephemeral, recipient)?,
        None => {
            if cli.files.is_empty() {
                eprintln!("Error: No files specified");
                eprintln!("Usage: b2hash [FILE]... or b2hash --help");
                std::process::exit(1);
            }

            let options = cli.options.decode()?;
            hash_files(&cli.files, &options)?;
        }
    }

    Ok(())
}
