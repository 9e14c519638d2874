//! EIP-712 typed-data hashing for CLOB authentication
//!
//! hash = keccak256("\x19\x01" || domainSeparator || structHash)
//!
//! Only the three field types the ClobAuth schema needs are supported
//! (`string`, `address`, `uint256`). Anything else is rejected, since a
//! silently mis-encoded field produces a signature the server will not accept.

use super::encoding::{encode_address, encode_string, encode_uint256};
use super::{AuthError, Result};
use crate::constants::{
    CLOB_AUTH_DOMAIN_NAME, CLOB_AUTH_DOMAIN_VERSION, CLOB_AUTH_MESSAGE, CLOB_AUTH_TYPE_NAME,
};
use ethers::types::{Address, U256};
use ethers::utils::keccak256;
use std::collections::HashMap;

/// A named, typed struct member
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypedField {
    pub name: &'static str,
    pub ty: &'static str,
}

impl TypedField {
    pub const fn new(name: &'static str, ty: &'static str) -> Self {
        Self { name, ty }
    }
}

/// Schema of the EIP-712 domain used by the CLOB (no verifying contract)
pub const EIP712_DOMAIN_FIELDS: [TypedField; 3] = [
    TypedField::new("name", "string"),
    TypedField::new("version", "string"),
    TypedField::new("chainId", "uint256"),
];

/// Schema of the L1 attestation struct
pub const CLOB_AUTH_FIELDS: [TypedField; 4] = [
    TypedField::new("address", "address"),
    TypedField::new("timestamp", "string"),
    TypedField::new("nonce", "uint256"),
    TypedField::new("message", "string"),
];

/// A value to be encoded under a declared field type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypedValue {
    String(String),
    Address(Address),
    Uint(U256),
}

impl From<&str> for TypedValue {
    fn from(value: &str) -> Self {
        TypedValue::String(value.to_string())
    }
}

impl From<String> for TypedValue {
    fn from(value: String) -> Self {
        TypedValue::String(value)
    }
}

impl From<Address> for TypedValue {
    fn from(value: Address) -> Self {
        TypedValue::Address(value)
    }
}

impl From<u64> for TypedValue {
    fn from(value: u64) -> Self {
        TypedValue::Uint(U256::from(value))
    }
}

impl From<U256> for TypedValue {
    fn from(value: U256) -> Self {
        TypedValue::Uint(value)
    }
}

/// Build the canonical type signature, e.g. `Name(type1 name1,type2 name2)`
pub fn type_signature(type_name: &str, fields: &[TypedField]) -> String {
    let members: Vec<String> = fields
        .iter()
        .map(|field| format!("{} {}", field.ty, field.name))
        .collect();

    format!("{}({})", type_name, members.join(","))
}

/// keccak256 of the canonical type signature
pub fn hash_type(type_name: &str, fields: &[TypedField]) -> [u8; 32] {
    keccak256(type_signature(type_name, fields).as_bytes())
}

/// Encode a single value as a 32-byte word according to its declared type
///
/// Addresses may be given either as parsed `Address` values or as hex strings.
pub fn encode_value(ty: &str, value: &TypedValue) -> Result<[u8; 32]> {
    match (ty, value) {
        ("string", TypedValue::String(s)) => Ok(encode_string(s)),
        ("address", TypedValue::Address(addr)) => Ok(encode_address(*addr)),
        ("address", TypedValue::String(s)) => {
            let addr: Address = s.parse().map_err(|e| {
                AuthError::SigningError(format!("Invalid address value '{}': {}", s, e))
            })?;
            Ok(encode_address(addr))
        }
        ("uint256", TypedValue::Uint(n)) => Ok(encode_uint256(*n)),
        ("string" | "address" | "uint256", other) => Err(AuthError::SigningError(format!(
            "Value {:?} does not match type {}",
            other, ty
        ))),
        (unsupported, _) => Err(AuthError::SigningError(format!(
            "Unsupported type: {}",
            unsupported
        ))),
    }
}

/// Compute the struct hash
///
/// structHash = keccak256(typeHash || encodeValue(field_1) || ... || encodeValue(field_n))
pub fn hash_struct(
    type_name: &str,
    fields: &[TypedField],
    data: &HashMap<&str, TypedValue>,
) -> Result<[u8; 32]> {
    let mut encoded = Vec::with_capacity(32 * (fields.len() + 1));
    encoded.extend_from_slice(&hash_type(type_name, fields));

    for field in fields {
        let value = data.get(field.name).ok_or_else(|| {
            AuthError::SigningError(format!("Missing value for field '{}'", field.name))
        })?;
        encoded.extend_from_slice(&encode_value(field.ty, value)?);
    }

    Ok(keccak256(&encoded))
}

/// Compute the full EIP-712 signing hash for a struct under a domain
pub fn hash_typed_data(
    domain: &TypedDataDomain,
    type_name: &str,
    fields: &[TypedField],
    data: &HashMap<&str, TypedValue>,
) -> Result<[u8; 32]> {
    let domain_separator = domain.separator()?;
    let struct_hash = hash_struct(type_name, fields, data)?;

    let mut message = Vec::with_capacity(66);
    message.extend_from_slice(b"\x19\x01");
    message.extend_from_slice(&domain_separator);
    message.extend_from_slice(&struct_hash);

    Ok(keccak256(&message))
}

/// EIP-712 domain descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedDataDomain {
    pub name: String,
    pub version: String,
    pub chain_id: u64,
}

impl TypedDataDomain {
    pub fn new(name: impl Into<String>, version: impl Into<String>, chain_id: u64) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            chain_id,
        }
    }

    /// The `ClobAuthDomain` domain for a chain
    pub fn clob_auth(chain_id: u64) -> Self {
        Self::new(CLOB_AUTH_DOMAIN_NAME, CLOB_AUTH_DOMAIN_VERSION, chain_id)
    }

    /// Compute the domain separator
    ///
    /// domainSeparator = keccak256(
    ///     keccak256("EIP712Domain(string name,string version,uint256 chainId)") ||
    ///     keccak256(name) || keccak256(version) || chainId
    /// )
    pub fn separator(&self) -> Result<[u8; 32]> {
        let data = HashMap::from([
            ("name", TypedValue::from(self.name.as_str())),
            ("version", TypedValue::from(self.version.as_str())),
            ("chainId", TypedValue::from(self.chain_id)),
        ]);

        hash_struct("EIP712Domain", &EIP712_DOMAIN_FIELDS, &data)
    }
}

/// The L1 attestation payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClobAuthMessage {
    /// Lowercase, 0x-prefixed wallet address
    pub address: String,
    /// Unix seconds as a decimal string
    pub timestamp: String,
    pub nonce: u64,
    pub message: String,
}

impl ClobAuthMessage {
    pub fn new(address: Address, timestamp: u64, nonce: u64) -> Self {
        Self {
            address: format!("0x{}", hex::encode(address.as_bytes())),
            timestamp: timestamp.to_string(),
            nonce,
            message: CLOB_AUTH_MESSAGE.to_string(),
        }
    }

    fn typed_data(&self) -> HashMap<&'static str, TypedValue> {
        HashMap::from([
            ("address", TypedValue::from(self.address.as_str())),
            ("timestamp", TypedValue::from(self.timestamp.as_str())),
            ("nonce", TypedValue::from(self.nonce)),
            ("message", TypedValue::from(self.message.as_str())),
        ])
    }

    pub fn struct_hash(&self) -> Result<[u8; 32]> {
        hash_struct(CLOB_AUTH_TYPE_NAME, &CLOB_AUTH_FIELDS, &self.typed_data())
    }

    /// The 32-byte hash that gets signed
    pub fn signing_hash(&self, domain: &TypedDataDomain) -> Result<[u8; 32]> {
        hash_typed_data(
            domain,
            CLOB_AUTH_TYPE_NAME,
            &CLOB_AUTH_FIELDS,
            &self.typed_data(),
        )
    }
}
