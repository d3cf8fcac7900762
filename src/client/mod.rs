pub mod menu;
pub mod orders;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{
    dto::{orders::CreateOrderRequest, params::Pagination},
    error::{AppError, AppResult, GENERIC_SERVICE_ERROR},
    models::{Order, OrderStatus},
    response::Paged,
};

/// Order-service operations the session layer depends on. The HTTP client
/// implements it; tests substitute an in-memory double.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    async fn submit_order(&self, draft: &CreateOrderRequest) -> AppResult<Order>;
    async fn list_orders(&self, pagination: &Pagination) -> AppResult<Paged<Order>>;
    async fn update_order_status(&self, order_id: &str, status: OrderStatus) -> AppResult<Order>;
    async fn kitchen_queue(&self) -> AppResult<Vec<Order>>;
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> AppResult<T> {
        tracing::debug!(method = "GET", path, "api request");
        let resp = self.http.get(self.url(path)).query(query).send().await?;
        Self::decode(path, resp).await
    }

    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        tracing::debug!(method = "POST", path, "api request");
        let resp = self.http.post(self.url(path)).json(body).send().await?;
        Self::decode(path, resp).await
    }

    pub(crate) async fn patch_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        tracing::debug!(method = "PATCH", path, "api request");
        let resp = self.http.patch(self.url(path)).json(body).send().await?;
        Self::decode(path, resp).await
    }

    async fn decode<T: DeserializeOwned>(path: &str, resp: reqwest::Response) -> AppResult<T> {
        let status = resp.status();
        if !status.is_success() {
            let message = resp
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|body| error_message(&body))
                .unwrap_or_else(|| GENERIC_SERVICE_ERROR.to_string());
            tracing::warn!(path, status = status.as_u16(), %message, "api request failed");
            return Err(AppError::Service {
                status: status.as_u16(),
                message,
            });
        }
        Ok(resp.json::<T>().await?)
    }
}

// Error bodies vary by endpoint: `{message}`, `{data: {error}}` or `{error}`.
fn error_message(body: &serde_json::Value) -> Option<String> {
    [
        body.get("message"),
        body.pointer("/data/error"),
        body.get("error"),
    ]
    .into_iter()
    .flatten()
    .find_map(|v| v.as_str())
    .map(str::to_string)
}
