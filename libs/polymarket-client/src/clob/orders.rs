//! Order placement and cancellation methods for ClobClient

use super::{ClobClient, Result};
use crate::auth::AuthError;
use crate::http::{HttpRequest, HttpTransport};
use crate::types::OrderType;
use serde_json::{json, Value};
use tracing::debug;

impl<T: HttpTransport> ClobClient<T> {
    /// Submit a signed order
    ///
    /// `order` is the signed order payload; the owner is the API key of the
    /// installed credentials.
    pub async fn post_order(&self, order: &Value, order_type: OrderType) -> Result<Value> {
        let owner = self
            .auth
            .as_ref()
            .and_then(|a| a.credentials())
            .map(|c| c.api_key.clone())
            .ok_or(AuthError::NotAuthenticated)?;

        debug!("Posting {} order", order_type);

        let body = json!({
            "order": order,
            "owner": owner,
            "orderType": order_type,
        });
        self.send_json(HttpRequest::post("/order").with_json(&body)?)
            .await
    }

    /// Cancel a single order by ID
    pub async fn cancel_order(&self, order_id: &str) -> Result<Value> {
        debug!("Canceling order {}", order_id);

        let body = json!({ "orderID": order_id });
        self.send_json(HttpRequest::delete("/order").with_json(&body)?)
            .await
    }

    /// Cancel multiple orders by ID
    pub async fn cancel_orders(&self, order_ids: &[String]) -> Result<Value> {
        debug!("Canceling {} orders", order_ids.len());

        self.send_json(HttpRequest::delete("/orders").with_json(order_ids)?)
            .await
    }

    /// Cancel all open orders
    pub async fn cancel_all(&self) -> Result<Value> {
        debug!("Canceling all orders");

        self.send_json(HttpRequest::delete("/cancel-all")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{sign_request, ApiCredentials, ClobAuthenticator};
    use crate::clob::ClobError;
    use crate::constants::{POLY_SIGNATURE, POLY_TIMESTAMP};
    use crate::http::{FakeTransport, Method};

    const DEV_KEY: &str = "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";
    const SECRET: &str = "c2VjcmV0LWtleS1mb3ItdGVzdGluZy0xMjM0NTY3OA==";

    fn client(fake: &FakeTransport) -> ClobClient<FakeTransport> {
        let auth = ClobAuthenticator::from_private_key(DEV_KEY, 137)
            .unwrap()
            .with_credentials(ApiCredentials::new("owner-key", SECRET, "pass"));
        ClobClient::new(fake.clone()).with_authenticator(auth)
    }

    #[tokio::test]
    async fn test_post_order_body_and_signature() {
        let fake = FakeTransport::new();
        fake.add_json_response(
            Method::Post,
            "/order",
            200,
            json!({"success": true, "orderID": "0xabc"}),
        );

        let response = client(&fake)
            .post_order(&json!({"salt": 1, "side": "BUY"}), OrderType::GTC)
            .await
            .unwrap();
        assert_eq!(response["orderID"], "0xabc");

        let request = fake.last_request().unwrap();
        let body = request.body.clone().unwrap();
        let sent: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(sent["owner"], "owner-key");
        assert_eq!(sent["orderType"], "GTC");
        assert_eq!(sent["order"]["side"], "BUY");

        // The signature covers the exact transmitted body
        let timestamp = &request.headers[POLY_TIMESTAMP];
        let expected =
            sign_request(timestamp, "POST", "/order", Some(body.as_str()), SECRET).unwrap();
        assert_eq!(request.headers[POLY_SIGNATURE], expected);
    }

    #[tokio::test]
    async fn test_cancel_order_body() {
        let fake = FakeTransport::new();
        fake.add_json_response(
            Method::Delete,
            "/order",
            200,
            json!({"canceled": ["0xabc"], "not_canceled": {}}),
        );

        client(&fake).cancel_order("0xabc").await.unwrap();

        let request = fake.last_request().unwrap();
        assert_eq!(request.body.as_deref(), Some(r#"{"orderID":"0xabc"}"#));
    }

    #[tokio::test]
    async fn test_cancel_orders_sends_id_array() {
        let fake = FakeTransport::new();
        fake.add_json_response(Method::Delete, "/orders", 200, json!({"canceled": []}));

        let ids = vec!["0x1".to_string(), "0x2".to_string()];
        client(&fake).cancel_orders(&ids).await.unwrap();

        let request = fake.last_request().unwrap();
        assert_eq!(request.body.as_deref(), Some(r#"["0x1","0x2"]"#));
    }

    #[tokio::test]
    async fn test_post_order_requires_credentials() {
        let fake = FakeTransport::new();
        let client = ClobClient::new(fake.clone());

        let err = client
            .post_order(&json!({}), OrderType::FOK)
            .await
            .unwrap_err();
        assert!(matches!(err, ClobError::Auth(AuthError::NotAuthenticated)));
        assert!(fake.requests().is_empty());
    }
}
