//! L1/L2 header generation for the CLOB

use super::credentials::ApiCredentials;
use super::hmac_signer::sign_request;
use super::signer::WalletSigner;
use super::{AuthError, Result};
use crate::constants::{
    POLY_ADDRESS, POLY_API_KEY, POLY_NONCE, POLY_PASSPHRASE, POLY_SIGNATURE, POLY_TIMESTAMP,
};
use ethers::types::Address;
use std::collections::HashMap;
use std::sync::Arc;

/// Get current Unix timestamp in seconds
pub fn current_timestamp() -> u64 {
    chrono::Utc::now().timestamp().max(0) as u64
}

/// Polymarket CLOB authentication manager
///
/// Cheap to clone: the wallet is shared and credentials are an immutable value.
/// Installing credentials returns a new authenticator instead of mutating this one.
#[derive(Debug, Clone)]
pub struct ClobAuthenticator {
    signer: Arc<WalletSigner>,
    credentials: Option<ApiCredentials>,
}

impl ClobAuthenticator {
    pub fn new(signer: WalletSigner) -> Self {
        Self {
            signer: Arc::new(signer),
            credentials: None,
        }
    }

    /// Create an authenticator from a hex private key
    pub fn from_private_key(private_key: &str, chain_id: u64) -> Result<Self> {
        Ok(Self::new(WalletSigner::new(private_key, chain_id)?))
    }

    pub fn signer(&self) -> &WalletSigner {
        &self.signer
    }

    /// Get wallet address
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    pub fn chain_id(&self) -> u64 {
        self.signer.chain_id()
    }

    /// Current API credentials, if any
    pub fn credentials(&self) -> Option<&ApiCredentials> {
        self.credentials.as_ref()
    }

    /// Check if L2 credentials are available
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Return a new authenticator holding `credentials`
    pub fn with_credentials(&self, credentials: ApiCredentials) -> Self {
        Self {
            signer: Arc::clone(&self.signer),
            credentials: Some(credentials),
        }
    }

    /// Sign the L1 attestation message
    pub fn sign_attestation(&self, timestamp: u64, nonce: u64) -> Result<String> {
        self.signer.sign_clob_auth(timestamp, nonce)
    }

    /// Build L1 authentication headers
    ///
    /// The address is lowercase here, matching the signed attestation payload.
    pub fn l1_headers(
        &self,
        nonce: u64,
        timestamp: Option<u64>,
    ) -> Result<HashMap<String, String>> {
        let timestamp = timestamp.unwrap_or_else(current_timestamp);
        let signature = self.sign_attestation(timestamp, nonce)?;

        let mut headers = HashMap::new();
        headers.insert(POLY_ADDRESS.to_string(), self.signer.address_lowercase());
        headers.insert(POLY_SIGNATURE.to_string(), signature);
        headers.insert(POLY_TIMESTAMP.to_string(), timestamp.to_string());
        headers.insert(POLY_NONCE.to_string(), nonce.to_string());

        Ok(headers)
    }

    /// Build L2 authentication headers for API requests
    ///
    /// The address keeps its checksum case here, unlike the L1 headers.
    pub fn l2_headers(
        &self,
        method: &str,
        path: &str,
        body: Option<&str>,
        timestamp: Option<u64>,
    ) -> Result<HashMap<String, String>> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(AuthError::NotAuthenticated)?;

        let timestamp = timestamp.unwrap_or_else(current_timestamp).to_string();
        let signature = sign_request(&timestamp, method, path, body, &credentials.api_secret)?;

        let mut headers = HashMap::new();
        headers.insert(POLY_ADDRESS.to_string(), self.signer.address_checksummed());
        headers.insert(POLY_SIGNATURE.to_string(), signature);
        headers.insert(POLY_TIMESTAMP.to_string(), timestamp);
        headers.insert(POLY_API_KEY.to_string(), credentials.api_key.clone());
        headers.insert(POLY_PASSPHRASE.to_string(), credentials.passphrase.clone());

        Ok(headers)
    }
}
