//! L2 API credentials issued by the CLOB

use super::{AuthError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// API credentials returned by the credential endpoints
///
/// Immutable once issued. A refresh produces a new value.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct ApiCredentials {
    #[serde(rename = "apiKey")]
    pub api_key: String,

    #[serde(rename = "secret")]
    pub api_secret: String,

    pub passphrase: String,
}

impl ApiCredentials {
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        passphrase: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            passphrase: passphrase.into(),
        }
    }

    /// Build credentials from a decoded response
    ///
    /// Accepts `apiKey`/`api_key`, `secret`/`api_secret` and `passphrase`.
    /// Missing or non-string fields become empty strings; a non-object is an error.
    pub fn from_json(value: &Value) -> Result<Self> {
        let map = value.as_object().ok_or_else(|| {
            AuthError::CredentialDerivationFailed("Invalid response from API".to_string())
        })?;

        Ok(Self {
            api_key: string_field(map, &["apiKey", "api_key"]),
            api_secret: string_field(map, &["secret", "api_secret"]),
            passphrase: string_field(map, &["passphrase"]),
        })
    }

    /// Parse a raw response body
    pub fn from_response_body(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body).map_err(|_| {
            AuthError::CredentialDerivationFailed("Invalid response from API".to_string())
        })?;

        Self::from_json(&value)
    }
}

/// First alias that is present and non-null wins
fn string_field(map: &Map<String, Value>, aliases: &[&str]) -> String {
    aliases
        .iter()
        .find_map(|key| map.get(*key).filter(|v| !v.is_null()))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

impl<'de> Deserialize<'de> for ApiCredentials {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_json(&value).map_err(serde::de::Error::custom)
    }
}

impl fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("passphrase", &"<redacted>")
            .finish()
    }
}
