//! HMAC-SHA256 signer for L2 request authentication

use super::{AuthError, Result};
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, URL_SAFE};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Standard-alphabet decoder that tolerates missing padding
const SECRET_DECODER: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Decode a URL-safe base64 API secret into raw key bytes
fn decode_secret(api_secret: &str) -> Result<Vec<u8>> {
    let standard: String = api_secret
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    SECRET_DECODER
        .decode(standard)
        .map_err(|e| AuthError::HmacError(format!("Invalid base64-encoded secret: {}", e)))
}

/// Generate the L2 signature for a request
///
/// The signature is computed as:
/// 1. Base64-decode the API secret (URL-safe alphabet)
/// 2. Build message: timestamp + METHOD + path + body
/// 3. HMAC-SHA256 sign with decoded secret
/// 4. Base64-encode the signature (URL-safe)
///
/// `body` must be the exact bytes that will be transmitted.
pub fn sign_request(
    timestamp: &str,
    method: &str,
    path: &str,
    body: Option<&str>,
    api_secret: &str,
) -> Result<String> {
    let secret_bytes = decode_secret(api_secret)?;

    let message = format!(
        "{}{}{}{}",
        timestamp,
        method.to_ascii_uppercase(),
        path,
        body.unwrap_or("")
    );

    let mut mac = HmacSha256::new_from_slice(&secret_bytes)
        .map_err(|e| AuthError::HmacError(e.to_string()))?;
    mac.update(message.as_bytes());

    Ok(URL_SAFE.encode(mac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // "dGVzdF9zZWNyZXRfMTIzNDU2" is base64 for "test_secret_123456"
    const SECRET: &str = "dGVzdF9zZWNyZXRfMTIzNDU2";
    const TIMESTAMP: &str = "1700000000";

    #[test]
    fn test_signature_matches_reference() {
        let signature = sign_request(TIMESTAMP, "GET", "/orders", None, SECRET).unwrap();
        assert_eq!(signature, "yu2WATKGWF9mv43aBnWe4oL5cd3vedeYZwayuEkTvFY=");
    }

    #[test]
    fn test_signature_with_body_matches_reference() {
        let signature = sign_request(
            TIMESTAMP,
            "POST",
            "/order",
            Some(r#"{"orderID":"0xabc"}"#),
            "c2VjcmV0LWtleS1mb3ItdGVzdGluZy0xMjM0NTY3OA==",
        )
        .unwrap();
        assert_eq!(signature, "T53SYqGc2E9ExXBOColGAJdz4W31LOq_YarXJCycwys=");
    }

    #[test]
    fn test_url_safe_secret_is_translated() {
        let signature = sign_request(
            TIMESTAMP,
            "DELETE",
            "/order",
            Some(r#"{"orderID":"0xabc"}"#),
            "-vv8_f7_-_8=",
        )
        .unwrap();
        assert_eq!(signature, "fhPpIawTXkG3eZP0ofusT2Vo1CzVyBH-PWi6MWrGFKM=");
    }

    #[test]
    fn test_secret_padding_is_optional() {
        let padded = sign_request(
            TIMESTAMP,
            "GET",
            "/orders",
            None,
            "c2VjcmV0LWtleS1mb3ItdGVzdGluZy0xMjM0NTY3OA==",
        )
        .unwrap();
        let unpadded = sign_request(
            TIMESTAMP,
            "GET",
            "/orders",
            None,
            "c2VjcmV0LWtleS1mb3ItdGVzdGluZy0xMjM0NTY3OA",
        )
        .unwrap();
        assert_eq!(padded, unpadded);
    }

    #[test]
    fn test_signature_is_deterministic() {
        let a = sign_request(TIMESTAMP, "GET", "/orders", None, SECRET).unwrap();
        let b = sign_request(TIMESTAMP, "GET", "/orders", None, SECRET).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_method_case_does_not_matter() {
        let upper = sign_request(TIMESTAMP, "POST", "/order", Some("{}"), SECRET).unwrap();
        let lower = sign_request(TIMESTAMP, "post", "/order", Some("{}"), SECRET).unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_body_bytes_matter() {
        let compact = sign_request(TIMESTAMP, "POST", "/order", Some(r#"{"a":1}"#), SECRET).unwrap();
        let spaced = sign_request(TIMESTAMP, "POST", "/order", Some(r#"{"a": 1}"#), SECRET).unwrap();
        assert_ne!(compact, spaced);
    }

    #[test]
    fn test_missing_body_equals_empty_body() {
        let none = sign_request(TIMESTAMP, "GET", "/orders", None, SECRET).unwrap();
        let empty = sign_request(TIMESTAMP, "GET", "/orders", Some(""), SECRET).unwrap();
        assert_eq!(none, empty);
    }

    #[test]
    fn test_malformed_secret_is_rejected() {
        let err = sign_request(TIMESTAMP, "GET", "/orders", None, "not-base64!!").unwrap_err();
        assert!(matches!(err, AuthError::HmacError(ref m) if m.contains("Invalid base64")));
    }

    #[test]
    fn test_output_is_url_safe() {
        let signature = sign_request(
            TIMESTAMP,
            "POST",
            "/order",
            Some(r#"{"orderID":"0xabc"}"#),
            "c2VjcmV0LWtleS1mb3ItdGVzdGluZy0xMjM0NTY3OA==",
        )
        .unwrap();
        assert!(!signature.contains('+'));
        assert!(!signature.contains('/'));
    }
}
