//! Data query methods for ClobClient

use super::{ClobClient, Result};
use crate::http::{HttpRequest, HttpTransport};
use serde_json::Value;
use tracing::debug;

/// Filters for open-order queries
#[derive(Debug, Clone, Default)]
pub struct OpenOrderParams {
    pub id: Option<String>,
    pub market: Option<String>,
    pub asset_id: Option<String>,
}

impl OpenOrderParams {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        [
            ("id", &self.id),
            ("market", &self.market),
            ("asset_id", &self.asset_id),
        ]
        .into_iter()
        .filter_map(|(k, v)| v.clone().map(|v| (k, v)))
        .collect()
    }
}

impl<T: HttpTransport> ClobClient<T> {
    /// Server time in unix seconds
    pub async fn get_server_time(&self) -> Result<u64> {
        self.send_json(HttpRequest::get("/time")).await
    }

    /// Get orderbook for a specific token
    pub async fn get_order_book(&self, token_id: &str) -> Result<Value> {
        debug!("Fetching orderbook for token {}", token_id);

        self.send_json(HttpRequest::get("/book").with_query(&[("token_id", token_id)]))
            .await
    }

    /// Fetch open orders, optionally filtered
    pub async fn get_open_orders(&self, params: Option<&OpenOrderParams>) -> Result<Value> {
        self.require_credentials()?;

        let query = params.map(OpenOrderParams::to_query).unwrap_or_default();
        self.send_json(HttpRequest::get("/data/orders").with_query(&query))
            .await
    }

    /// Get a single order by ID
    pub async fn get_order(&self, order_id: &str) -> Result<Value> {
        self.require_credentials()?;

        self.send_json(HttpRequest::get(format!("/data/order/{}", order_id)))
            .await
    }

    /// List the API keys issued to this wallet
    pub async fn get_api_keys(&self) -> Result<Value> {
        self.require_credentials()?;

        self.send_json(HttpRequest::get("/auth/api-keys")).await
    }

    /// Revoke the API key currently installed
    pub async fn delete_api_key(&self) -> Result<Value> {
        self.send_json(HttpRequest::delete("/auth/api-key")).await
    }
}
