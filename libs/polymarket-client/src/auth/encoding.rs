//! ABI encoding helpers for EIP-712 hashing

use ethers::types::{Address, U256};
use ethers::utils::keccak256;

/// Encode a U256 as 32 bytes (big-endian, left-padded)
pub fn encode_uint256(value: U256) -> [u8; 32] {
    let mut buf = [0u8; 32];
    value.to_big_endian(&mut buf);
    buf
}

/// Encode an address as 32 bytes (left-padded with zeros)
pub fn encode_address(addr: Address) -> [u8; 32] {
    let mut buf = [0u8; 32];
    buf[12..].copy_from_slice(addr.as_bytes());
    buf
}

/// Encode a dynamic string as the keccak256 of its UTF-8 bytes
pub fn encode_string(value: &str) -> [u8; 32] {
    keccak256(value.as_bytes())
}
