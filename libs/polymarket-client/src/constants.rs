//! Polymarket API constants
//!
//! Endpoints, header names and the EIP-712 values used by CLOB authentication.

// ============================================================================
// Network Constants
// ============================================================================

/// Chain ID for Polygon Mainnet
pub const POLYGON_CHAIN_ID: u64 = 137;

/// Chain ID for the Polygon Amoy testnet
pub const AMOY_CHAIN_ID: u64 = 80002;

// ============================================================================
// API Base URLs
// ============================================================================

/// Gamma API (read-only market data)
pub const GAMMA_API_URL: &str = "https://gamma-api.polymarket.com";

/// CLOB API (trading and order management)
pub const CLOB_API_URL: &str = "https://clob.polymarket.com";

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("polymarket-sdk/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// Credential Endpoints
// ============================================================================

/// Derive existing API credentials (GET, L1 headers)
pub const DERIVE_API_KEY_PATH: &str = "/auth/derive-api-key";

/// Create new API credentials (POST, L1 headers)
pub const CREATE_API_KEY_PATH: &str = "/auth/api-key";

// ============================================================================
// EIP-712 ClobAuth Constants
// ============================================================================

/// EIP-712 domain name for CLOB authentication
pub const CLOB_AUTH_DOMAIN_NAME: &str = "ClobAuthDomain";

/// EIP-712 domain version
pub const CLOB_AUTH_DOMAIN_VERSION: &str = "1";

/// Primary type name of the attestation struct
pub const CLOB_AUTH_TYPE_NAME: &str = "ClobAuth";

/// Fixed attestation text signed during L1 authentication
pub const CLOB_AUTH_MESSAGE: &str = "This message attests that I control the given wallet";

// ============================================================================
// Authentication Headers
// ============================================================================

pub const POLY_ADDRESS: &str = "POLY_ADDRESS";
pub const POLY_SIGNATURE: &str = "POLY_SIGNATURE";
pub const POLY_TIMESTAMP: &str = "POLY_TIMESTAMP";
pub const POLY_NONCE: &str = "POLY_NONCE";
pub const POLY_API_KEY: &str = "POLY_API_KEY";
pub const POLY_PASSPHRASE: &str = "POLY_PASSPHRASE";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_id() {
        assert_eq!(POLYGON_CHAIN_ID, 137);
    }

    #[test]
    fn test_user_agent_carries_version() {
        assert!(USER_AGENT.starts_with("polymarket-sdk/"));
    }
}
