//! CLOB authentication
//!
//! Split into focused modules:
//! - `encoding`: ABI word encoding helpers
//! - `eip712`: typed-data hashing (domain separator, struct hash)
//! - `signer`: wallet key handling and recoverable ECDSA signatures (L1)
//! - `hmac_signer`: per-request HMAC signatures (L2)
//! - `credentials`: API credentials issued by the CLOB
//! - `authenticator`: L1/L2 header generation

mod authenticator;
mod credentials;
pub mod eip712;
mod encoding;
mod hmac_signer;
mod signer;

pub use authenticator::{current_timestamp, ClobAuthenticator};
pub use credentials::ApiCredentials;
pub use eip712::{ClobAuthMessage, TypedDataDomain, TypedField, TypedValue};
pub use hmac_signer::sign_request;
pub use signer::{normalize_private_key, WalletSigner};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("Private key is required for CLOB authentication")]
    MissingPrivateKey,

    #[error("EIP-712 signing failed: {0}")]
    SigningError(String),

    #[error("HMAC signature generation failed: {0}")]
    HmacError(String),

    #[error("CLOB write operations require authentication")]
    NotAuthenticated,

    #[error("Failed to derive API credentials: {0}")]
    CredentialDerivationFailed(String),
}

pub type Result<T> = std::result::Result<T, AuthError>;
