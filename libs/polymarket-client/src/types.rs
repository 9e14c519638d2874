//! Closed value sets shared by the CLOB endpoints

use serde::{Deserialize, Serialize};
use std::fmt;

/// Order side
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderSide::Buy => "BUY",
            OrderSide::Sell => "SELL",
        }
    }
}

/// Order type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    FOK, // Fill Or Kill
    FAK, // Fill And Kill (partial fills allowed, rest cancelled)
    GTC, // Good Till Cancel
    GTD, // Good Till Date
}

impl OrderType {
    /// Convert to API string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::FOK => "FOK",
            OrderType::FAK => "FAK",
            OrderType::GTC => "GTC",
            OrderType::GTD => "GTD",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status reported for a placed order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Matched,
    Live,
    Delayed,
    Unmatched,
}

/// Which kind of account signs orders; serialized as its integer code
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(into = "u8", try_from = "u8")]
pub enum SignatureType {
    #[default]
    Eoa,
    PolymarketProxyEmail,
    PolymarketProxyWallet,
}

impl From<SignatureType> for u8 {
    fn from(value: SignatureType) -> Self {
        match value {
            SignatureType::Eoa => 0,
            SignatureType::PolymarketProxyEmail => 1,
            SignatureType::PolymarketProxyWallet => 2,
        }
    }
}

impl TryFrom<u8> for SignatureType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(SignatureType::Eoa),
            1 => Ok(SignatureType::PolymarketProxyEmail),
            2 => Ok(SignatureType::PolymarketProxyWallet),
            other => Err(format!("unknown signature type: {}", other)),
        }
    }
}
