//! Live tests against the public Polymarket endpoints
//!
//! These hit the real network and are marked with #[ignore]. Run explicitly:
//!
//! ```bash
//! # Optional, enables the credential test
//! export POLYMARKET_PRIVATE_KEY="0x..."
//!
//! cargo test -p polymarket-client --test live_clob -- --ignored
//! ```

mod common;

use polymarket_client::{Client, Config};

#[tokio::test]
#[ignore]
async fn test_live_server_time() {
    let client = Client::new(Config::default()).unwrap();
    let time = client.clob().get_server_time().await.unwrap();

    verbose_println!("CLOB server time: {}", time);
    assert!(time > 1_700_000_000);
}

#[tokio::test]
#[ignore]
async fn test_live_derive_or_create() {
    let config = Config::from_env().unwrap();
    if config.private_key.is_none() {
        println!("Skipping: POLYMARKET_PRIVATE_KEY not set");
        return;
    }

    let mut client = Client::new(config).unwrap();
    let creds = client.auth(None, 0).await.unwrap();

    verbose_println!("Authenticated, api key {}", creds.api_key);
    assert!(!creds.api_key.is_empty());
    assert!(client.clob().is_authenticated());
}
