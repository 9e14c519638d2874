//! Gamma Markets API client

use crate::http::{HttpError, HttpRequest, HttpTransport, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

/// Default page size for list endpoints
const DEFAULT_LIMIT: usize = 100;

/// Filters for market and event listings
#[derive(Debug, Clone, Default)]
pub struct GammaFilters {
    pub active: Option<bool>,
    pub closed: Option<bool>,
    pub archived: Option<bool>,
    pub start_date_min: Option<chrono::DateTime<chrono::Utc>>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

impl GammaFilters {
    /// Build query parameters for HTTP request
    pub fn to_query_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            (
                "limit".to_string(),
                self.limit.unwrap_or(DEFAULT_LIMIT).to_string(),
            ),
            ("offset".to_string(), self.offset.unwrap_or(0).to_string()),
        ];

        if let Some(active) = self.active {
            params.push(("active".to_string(), active.to_string()));
        }

        if let Some(closed) = self.closed {
            params.push(("closed".to_string(), closed.to_string()));
        }

        if let Some(archived) = self.archived {
            params.push(("archived".to_string(), archived.to_string()));
        }

        if let Some(start_date_min) = self.start_date_min {
            params.push(("start_date_min".to_string(), start_date_min.to_rfc3339()));
        }

        params
    }
}

/// Read-only client for the Gamma API
pub struct GammaClient<T> {
    transport: T,
}

impl<T: HttpTransport> GammaClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn get_json<R: DeserializeOwned>(&self, request: HttpRequest) -> Result<R> {
        debug!("Gamma GET {}", request.path);

        let response = self.transport.send(request).await?;
        if response.status == 429 {
            warn!("Rate limit exceeded");
        }
        response.error_for_status()?.json()
    }

    /// Health check
    pub async fn health(&self) -> Result<Value> {
        self.get_json(HttpRequest::get("/")).await
    }

    /// Fetch a single page of markets
    pub async fn list_markets(&self, filters: &GammaFilters) -> Result<Vec<Value>> {
        self.get_json(HttpRequest::get("/markets").with_query(&filters.to_query_params()))
            .await
    }

    pub async fn get_market(&self, market_id: &str) -> Result<Value> {
        self.get_json(HttpRequest::get(format!("/markets/{}", market_id)))
            .await
    }

    /// Fetch a single page of events
    pub async fn list_events(&self, filters: &GammaFilters) -> Result<Vec<Value>> {
        self.get_json(HttpRequest::get("/events").with_query(&filters.to_query_params()))
            .await
    }

    pub async fn get_event(&self, event_id: &str) -> Result<Value> {
        self.get_json(HttpRequest::get(format!("/events/{}", event_id)))
            .await
    }

    /// Search markets, events and profiles
    pub async fn search(&self, query: &str) -> Result<Value> {
        if query.trim().is_empty() {
            return Err(HttpError::InvalidRequest(
                "search query must not be empty".to_string(),
            ));
        }

        self.get_json(HttpRequest::get("/public-search").with_query(&[("q", query)]))
            .await
    }
}
