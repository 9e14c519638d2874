//! API key management methods for ClobClient

use super::{ClobClient, Result};
use crate::auth::{self, ApiCredentials, AuthError, ClobAuthenticator, WalletSigner};
use crate::constants::{CREATE_API_KEY_PATH, DERIVE_API_KEY_PATH};
use crate::http::{HttpRequest, HttpTransport};
use tracing::{debug, info, warn};

impl<T: HttpTransport> ClobClient<T> {
    /// Derive the API key bound to this wallet and nonce
    pub async fn derive_api_key(
        &self,
        auth: &ClobAuthenticator,
        nonce: u64,
    ) -> auth::Result<ApiCredentials> {
        debug!("Deriving API key (nonce {})", nonce);

        let headers = auth.l1_headers(nonce, None)?;
        let request = HttpRequest::get(DERIVE_API_KEY_PATH).with_headers(headers);
        self.request_credentials(request, "derive").await
    }

    /// Create a new API key for this wallet and nonce
    pub async fn create_api_key(
        &self,
        auth: &ClobAuthenticator,
        nonce: u64,
    ) -> auth::Result<ApiCredentials> {
        debug!("Creating API key (nonce {})", nonce);

        let headers = auth.l1_headers(nonce, None)?;
        let request = HttpRequest::post(CREATE_API_KEY_PATH).with_headers(headers);
        self.request_credentials(request, "create").await
    }

    /// Get API credentials (either derive from existing or create new)
    ///
    /// Only a failed derivation falls back to creation. Signing errors
    /// surface immediately, as does the error of the create call.
    pub async fn derive_or_create_credentials(
        &self,
        auth: &ClobAuthenticator,
        nonce: u64,
    ) -> auth::Result<ApiCredentials> {
        match self.derive_api_key(auth, nonce).await {
            Ok(creds) => Ok(creds),
            Err(AuthError::CredentialDerivationFailed(reason)) => {
                warn!("API key derivation failed ({}), creating a new key", reason);
                self.create_api_key(auth, nonce).await
            }
            Err(e) => Err(e),
        }
    }

    /// Bootstrap L2 credentials for `signer` and install them on this client
    pub async fn authenticate(
        &mut self,
        signer: WalletSigner,
        nonce: u64,
    ) -> Result<ApiCredentials> {
        let auth = ClobAuthenticator::new(signer);
        let credentials = self.derive_or_create_credentials(&auth, nonce).await?;

        info!(
            "Authenticated with CLOB as {}",
            auth.signer().address_checksummed()
        );

        self.auth = Some(auth.with_credentials(credentials.clone()));
        Ok(credentials)
    }

    /// Send an L1-signed credential request; every failure is a derivation failure
    async fn request_credentials(
        &self,
        request: HttpRequest,
        action: &str,
    ) -> auth::Result<ApiCredentials> {
        let response = self
            .transport
            .send(request)
            .await
            .map_err(|e| derivation_failed(action, e))?;
        let response = response
            .error_for_status()
            .map_err(|e| derivation_failed(action, e))?;

        ApiCredentials::from_response_body(&response.body)
    }
}

fn derivation_failed(action: &str, err: impl std::fmt::Display) -> AuthError {
    AuthError::CredentialDerivationFailed(format!("{} API key: {}", action, err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{POLY_ADDRESS, POLY_NONCE, POLY_SIGNATURE};
    use crate::http::{FakeTransport, HttpResponse, Method};
    use serde_json::json;

    const DEV_KEY: &str = "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";

    fn authenticator() -> ClobAuthenticator {
        ClobAuthenticator::from_private_key(DEV_KEY, 137).unwrap()
    }

    #[tokio::test]
    async fn test_derive_success_skips_create() {
        let fake = FakeTransport::new();
        fake.add_json_response(
            Method::Get,
            DERIVE_API_KEY_PATH,
            200,
            json!({"apiKey": "k", "secret": "s", "passphrase": "p"}),
        );

        let client = ClobClient::new(fake.clone());
        let creds = client
            .derive_or_create_credentials(&authenticator(), 0)
            .await
            .unwrap();

        assert_eq!(creds, ApiCredentials::new("k", "s", "p"));
        assert!(!fake.has_request(Method::Post, CREATE_API_KEY_PATH));

        let request = fake.last_request().unwrap();
        assert_eq!(
            request.headers[POLY_ADDRESS],
            "0x70997970c51812dc3a010c7d01b50e0d17dc79c8"
        );
        assert_eq!(request.headers[POLY_NONCE], "0");
        assert_eq!(request.headers[POLY_SIGNATURE].len(), 132);
    }

    #[tokio::test]
    async fn test_derive_not_found_falls_back_to_create() {
        let fake = FakeTransport::new();
        fake.add_json_response(
            Method::Post,
            CREATE_API_KEY_PATH,
            200,
            json!({"apiKey": "k", "secret": "s", "passphrase": "p"}),
        );

        let client = ClobClient::new(fake.clone());
        let creds = client
            .derive_or_create_credentials(&authenticator(), 5)
            .await
            .unwrap();

        assert_eq!(creds, ApiCredentials::new("k", "s", "p"));

        let requests = fake.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].method, Method::Get);
        assert_eq!(requests[0].path, DERIVE_API_KEY_PATH);
        assert_eq!(requests[1].method, Method::Post);
        assert_eq!(requests[1].path, CREATE_API_KEY_PATH);
        assert_eq!(requests[1].headers[POLY_NONCE], "5");
    }

    #[tokio::test]
    async fn test_non_object_derive_body_falls_back() {
        let fake = FakeTransport::new();
        fake.add_response(
            Method::Get,
            DERIVE_API_KEY_PATH,
            HttpResponse::new(200, "<html>oops</html>"),
        );
        fake.add_json_response(
            Method::Post,
            CREATE_API_KEY_PATH,
            200,
            json!({"api_key": "k2", "api_secret": "s2", "passphrase": "p2"}),
        );

        let client = ClobClient::new(fake);
        let creds = client
            .derive_or_create_credentials(&authenticator(), 0)
            .await
            .unwrap();
        assert_eq!(creds, ApiCredentials::new("k2", "s2", "p2"));
    }

    #[tokio::test]
    async fn test_create_failure_is_surfaced() {
        let fake = FakeTransport::new();
        fake.add_json_response(
            Method::Post,
            CREATE_API_KEY_PATH,
            500,
            json!({"error": "boom"}),
        );

        let client = ClobClient::new(fake.clone());
        let err = client
            .derive_or_create_credentials(&authenticator(), 0)
            .await
            .unwrap_err();

        match err {
            AuthError::CredentialDerivationFailed(msg) => assert!(msg.starts_with("create")),
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(fake.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_authenticate_installs_credentials() {
        let fake = FakeTransport::new();
        fake.add_json_response(
            Method::Get,
            DERIVE_API_KEY_PATH,
            200,
            json!({"apiKey": "k", "secret": "dGVzdF9zZWNyZXRfMTIzNDU2", "passphrase": "p"}),
        );

        let mut client = ClobClient::new(fake);
        assert!(!client.is_authenticated());

        let signer = WalletSigner::new(DEV_KEY, 137).unwrap();
        let creds = client.authenticate(signer, 0).await.unwrap();

        assert_eq!(creds.api_key, "k");
        assert!(client.is_authenticated());
        assert_eq!(
            client.authenticator().unwrap().credentials(),
            Some(&creds)
        );
    }
}
