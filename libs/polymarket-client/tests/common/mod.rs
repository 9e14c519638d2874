//! Common test utilities for polymarket-client integration tests

#![allow(dead_code)]

use polymarket_client::auth::ApiCredentials;
use polymarket_client::auth::ClobAuthenticator;

/// Macro for verbose test output (controlled by TEST_VERBOSE env var)
#[macro_export]
macro_rules! verbose_println {
    ($($arg:tt)*) => {
        if std::env::var("TEST_VERBOSE").is_ok() {
            println!($($arg)*);
        }
    };
}

pub mod fixtures {
    //! Well-known development wallet and values signed with it

    /// Second default Hardhat/Anvil development key
    pub const DEV_KEY: &str = "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";

    pub const DEV_ADDRESS_LOWER: &str = "0x70997970c51812dc3a010c7d01b50e0d17dc79c8";

    pub const DEV_ADDRESS_CHECKSUM: &str = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8";

    pub const TIMESTAMP: u64 = 1_700_000_000;

    /// ClobAuth signature for DEV_KEY on chain 137, nonce 0, TIMESTAMP
    pub const L1_SIGNATURE: &str = "0xa6eac9a1927262c9ea8ff8e59f701392c16873a714b0f976f1481df77b438a1829c5e7fc70854d68b320b4ca7beff251202adb8ff00ad00456eab408e3a95ce41c";

    pub const API_SECRET: &str = "dGVzdF9zZWNyZXRfMTIzNDU2";

    /// HMAC of `TIMESTAMP GET /orders` under API_SECRET
    pub const L2_GET_ORDERS_SIGNATURE: &str = "yu2WATKGWF9mv43aBnWe4oL5cd3vedeYZwayuEkTvFY=";
}

pub fn dev_authenticator() -> ClobAuthenticator {
    ClobAuthenticator::from_private_key(fixtures::DEV_KEY, 137).expect("dev key is valid")
}

pub fn dev_credentials() -> ApiCredentials {
    ApiCredentials::new("test_key", fixtures::API_SECRET, "test_pass")
}
