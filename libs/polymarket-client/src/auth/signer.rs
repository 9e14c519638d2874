//! Wallet signer for L1 (EIP-712) authentication

use super::eip712::{ClobAuthMessage, TypedDataDomain};
use super::{AuthError, Result};
use ethers::signers::{LocalWallet, Signer};
use ethers::types::{Address, Signature, H256};
use std::fmt;

/// Validate a private key and return its canonical form (64 lowercase hex chars, no prefix)
pub fn normalize_private_key(private_key: &str) -> Result<String> {
    let key = private_key.strip_prefix("0x").unwrap_or(private_key);

    if key.is_empty() || !key.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(AuthError::InvalidPrivateKey(
            "Must be a hexadecimal string".to_string(),
        ));
    }

    if key.len() != 64 {
        return Err(AuthError::InvalidPrivateKey(
            "Must be 32 bytes (64 hex characters)".to_string(),
        ));
    }

    Ok(key.to_ascii_lowercase())
}

/// secp256k1 wallet that produces recoverable signatures over 32-byte hashes
pub struct WalletSigner {
    wallet: LocalWallet,
    address: Address,
    chain_id: u64,
}

impl WalletSigner {
    /// Create a signer from a hex private key (with or without 0x prefix)
    pub fn new(private_key: &str, chain_id: u64) -> Result<Self> {
        let key = normalize_private_key(private_key)?;

        // Zero or out-of-range scalars pass the format check but not key derivation
        let wallet = key
            .parse::<LocalWallet>()
            .map_err(|e| AuthError::SigningError(format!("Failed to derive address: {}", e)))?
            .with_chain_id(chain_id);

        let address = wallet.address();

        Ok(Self {
            wallet,
            address,
            chain_id,
        })
    }

    /// Get wallet address
    pub fn address(&self) -> Address {
        self.address
    }

    /// Address as lowercase 0x-prefixed hex (L1 headers and the attestation payload)
    pub fn address_lowercase(&self) -> String {
        format!("0x{}", hex::encode(self.address.as_bytes()))
    }

    /// Address in EIP-55 checksum case (L2 headers)
    pub fn address_checksummed(&self) -> String {
        ethers::utils::to_checksum(&self.address, None)
    }

    /// Get the chain ID
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Sign a raw 32-byte hash without any prefix
    ///
    /// The result is laid out as r || s || v with v = 27 + recovery id.
    pub fn sign_hash(&self, hash: [u8; 32]) -> Result<Signature> {
        self.wallet
            .sign_hash(H256::from(hash))
            .map_err(|e| AuthError::SigningError(e.to_string()))
    }

    /// Sign a raw hash and return it as 0x-prefixed hex (130 hex chars)
    pub fn sign_hash_hex(&self, hash: [u8; 32]) -> Result<String> {
        let signature = self.sign_hash(hash)?;
        Ok(format!("0x{}", hex::encode(signature.to_vec())))
    }

    /// Sign the ClobAuth attestation for a timestamp and nonce
    pub fn sign_clob_auth(&self, timestamp: u64, nonce: u64) -> Result<String> {
        let message = ClobAuthMessage::new(self.address, timestamp, nonce);
        let hash = message.signing_hash(&TypedDataDomain::clob_auth(self.chain_id))?;

        self.sign_hash_hex(hash)
    }
}

impl fmt::Debug for WalletSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletSigner")
            .field("address", &self.address_checksummed())
            .field("chain_id", &self.chain_id)
            .finish_non_exhaustive()
    }
}
