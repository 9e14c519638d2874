//! CLOB REST client
//!
//! Split into focused modules:
//! - `auth`: API credential derivation and creation (L1)
//! - `orders`: order placement and cancellation (L2)
//! - `queries`: market data and account queries

mod auth;
mod orders;
mod queries;

pub use queries::OpenOrderParams;

use crate::auth::{AuthError, ClobAuthenticator};
use crate::http::{HttpError, HttpRequest, HttpResponse, HttpTransport};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ClobError {
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

pub type Result<T> = std::result::Result<T, ClobError>;

/// REST client for the Polymarket CLOB
pub struct ClobClient<T> {
    transport: T,
    auth: Option<ClobAuthenticator>,
}

impl<T: HttpTransport> ClobClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            auth: None,
        }
    }

    /// Attach an authenticator, e.g. one rebuilt from stored credentials
    pub fn with_authenticator(mut self, auth: ClobAuthenticator) -> Self {
        self.auth = Some(auth);
        self
    }

    pub fn set_authenticator(&mut self, auth: ClobAuthenticator) {
        self.auth = Some(auth);
    }

    pub fn authenticator(&self) -> Option<&ClobAuthenticator> {
        self.auth.as_ref()
    }

    /// Whether requests will carry L2 headers
    pub fn is_authenticated(&self) -> bool {
        self.auth
            .as_ref()
            .map(ClobAuthenticator::has_credentials)
            .unwrap_or(false)
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn require_credentials(&self) -> Result<()> {
        if self.is_authenticated() {
            Ok(())
        } else {
            Err(AuthError::NotAuthenticated.into())
        }
    }

    /// Send a request, signing it when credentials are installed
    ///
    /// The L2 signature covers the method, the path without its query string
    /// and the body string exactly as it is transmitted.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let request = match self.auth.as_ref().filter(|a| a.has_credentials()) {
            Some(auth) => {
                let headers = auth.l2_headers(
                    request.method.as_str(),
                    &request.path,
                    request.body.as_deref(),
                    None,
                )?;
                request.with_headers(headers)
            }
            None if request.method.is_write() => return Err(AuthError::NotAuthenticated.into()),
            None => request,
        };

        debug!("CLOB {} {}", request.method, request.path);

        let response = self.transport.send(request).await?;
        Ok(response.error_for_status()?)
    }

    async fn send_json<R: DeserializeOwned>(&self, request: HttpRequest) -> Result<R> {
        let response = self.send(request).await?;
        Ok(response.json()?)
    }
}
