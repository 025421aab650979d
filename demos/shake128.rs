use anyhow::{Context, Result};
use clap::Parser;
use keccak_with_rust::fips202::shake128_hex;
use std::io::{self, Read};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_BYTES: usize = 32;

/// Read a message from stdin and print its SHAKE128 digest in hex
#[derive(Parser, Debug, Default)]
#[command(name = "shake128", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Digest length in bytes (32 when missing or not a number)
    #[arg(allow_hyphen_values = true, num_args = 0..)]
    args: Vec<String>,
}

#[derive(Debug, PartialEq, Eq)]
struct Config {
    bytes: usize,
}

impl Config {
    fn from_cli(cli: &Cli) -> Self {
        let bytes = cli
            .args
            .first()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_BYTES);
        Self { bytes }
    }
}

fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            debug!("ignoring arguments: {}", e.kind());
            Cli::default()
        }
    }
}

fn read_message() -> Vec<u8> {
    let mut msg = Vec::new();
    if let Err(e) = io::stdin().lock().read_to_end(&mut msg) {
        warn!("could not read stdin, hashing the empty message: {}", e);
        msg.clear();
    }
    msg
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();

    let config = Config::from_cli(&parse_cli());
    let msg = read_message();
    debug!(message_bytes = msg.len(), digest_bytes = config.bytes, "hashing");

    let digest = shake128_hex(&msg, config.bytes).context("SHAKE128 computation failed")?;
    println!("{}", digest);
    Ok(())
}
