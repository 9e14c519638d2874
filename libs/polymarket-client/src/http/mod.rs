//! HTTP transport abstraction
//!
//! The clients only build requests and read responses; the transport decides
//! how a request reaches the network. `ReqwestTransport` is the production
//! implementation and `FakeTransport` replays canned responses in tests.

mod fake;
mod reqwest_transport;
mod types;

pub use fake::FakeTransport;
pub use reqwest_transport::ReqwestTransport;
pub use types::{HttpRequest, HttpResponse, Method};

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HttpError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Authentication failed ({status}): {message}")]
    Authentication { status: u16, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed ({status}): {message}")]
    Validation { status: u16, message: String },

    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse JSON response: {message}. Response body: {body}")]
    InvalidJson { message: String, body: String },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl HttpError {
    /// Classify a non-2xx response
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 | 403 => HttpError::Authentication { status, message },
            404 => HttpError::NotFound(message),
            400 | 422 => HttpError::Validation { status, message },
            429 => HttpError::RateLimitExceeded(message),
            s if s >= 500 => HttpError::Server { status, message },
            _ => HttpError::ApiError { status, message },
        }
    }

    /// HTTP status associated with the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::RequestFailed(e) => e.status().map(|s| s.as_u16()),
            HttpError::Authentication { status, .. }
            | HttpError::Validation { status, .. }
            | HttpError::Server { status, .. }
            | HttpError::ApiError { status, .. } => Some(*status),
            HttpError::NotFound(_) => Some(404),
            HttpError::RateLimitExceeded(_) => Some(429),
            HttpError::InvalidJson { .. } | HttpError::InvalidRequest(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, HttpError>;

/// Something that can dispatch an `HttpRequest`
///
/// Implementations return every HTTP response, successful or not, as an
/// `HttpResponse`; errors are reserved for failures to get a response at all.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;

    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<HttpResponse> {
        self.send(HttpRequest::get(path).with_query(query)).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<HttpResponse> {
        self.send(HttpRequest::post(path).with_json(body)?).await
    }

    async fn put(&self, path: &str, body: &Value) -> Result<HttpResponse> {
        self.send(HttpRequest::put(path).with_json(body)?).await
    }

    async fn patch(&self, path: &str, body: &Value) -> Result<HttpResponse> {
        self.send(HttpRequest::patch(path).with_json(body)?).await
    }

    async fn delete(&self, path: &str) -> Result<HttpResponse> {
        self.send(HttpRequest::delete(path)).await
    }
}
