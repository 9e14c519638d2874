//! Derive or create CLOB API credentials for a wallet
//!
//! Requires in the environment (or `.env`):
//!   - POLYMARKET_PRIVATE_KEY (with or without 0x prefix)
//!
//! Optional:
//!   - POLYMARKET_CONFIG_PATH (YAML config, default config/polymarket.yaml)
//!   - POLYMARKET_CLOB_URL, POLYMARKET_CHAIN_ID
//!
//! Usage:
//!   cargo run --bin clob_credentials -- [nonce]

use anyhow::{anyhow, Context, Result};
use polymarket_sdk::bin_common::{load_config, parse_args, parse_nonce};
use polymarket_sdk::polymarket_client::{init_tracing, Client};
use tracing::info;

fn print_usage(program: &str) {
    println!("CLOB Credentials");
    println!();
    println!("Usage: {} [nonce]", program);
    println!();
    println!("Arguments:");
    println!("  nonce   Credential nonce (default 0)");
    println!();
    println!("Environment Variables (set in .env file):");
    println!("  POLYMARKET_PRIVATE_KEY   Wallet private key");
    println!("  POLYMARKET_CONFIG_PATH   Optional YAML config path");
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let args = parse_args();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage("clob_credentials");
        return Ok(());
    }

    let nonce = parse_nonce(args.first().map(String::as_str)).map_err(|e| anyhow!(e))?;

    let config = load_config().context("Failed to load configuration")?;
    config
        .require_private_key()
        .context("A private key is required to authenticate")?;

    info!(
        "Requesting credentials from {} (chain {}, nonce {})",
        config.clob_base_url, config.chain_id, nonce
    );

    let mut client = Client::new(config).context("Failed to build HTTP client")?;
    let credentials = client
        .auth(None, nonce)
        .await
        .context("Failed to derive or create API credentials")?;

    if let Some(auth) = client.clob().authenticator() {
        info!("Authenticated as {}", auth.signer().address_checksummed());
    }

    println!("{}", serde_json::to_string_pretty(&credentials)?);

    Ok(())
}
