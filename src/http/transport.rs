//! Transport trait and decoded responses

use super::client::HttpClient;
use crate::error::{Error, Result};
use crate::types::{JsonValue, Method};
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

/// A successful API response
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// Decoded body
    pub body: T,
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HeaderMap,
}

impl ApiResponse<JsonValue> {
    /// Decode the JSON body into `T`.
    ///
    /// An empty body is `null`, which decodes into `()` and `Option`s.
    pub fn decode<T: DeserializeOwned>(self) -> Result<ApiResponse<T>> {
        Ok(ApiResponse {
            body: serde_json::from_value(self.body)?,
            status: self.status,
            headers: self.headers,
        })
    }
}

/// Issues a single API request.
///
/// Implementations resolve `path` against their base URL, send `body` as
/// JSON when present, and fail with [`Error::Cancelled`] if `cancel` fires
/// before the response arrives.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<JsonValue>,
        cancel: &CancellationToken,
    ) -> Result<ApiResponse<JsonValue>>;
}

#[async_trait]
impl Transport for HttpClient {
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<JsonValue>,
        cancel: &CancellationToken,
    ) -> Result<ApiResponse<JsonValue>> {
        let response = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(Error::Cancelled),
            result = self.request(method.into(), path, body.as_ref()) => result?,
        };

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let text = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(Error::Cancelled),
            result = response.text() => result?,
        };

        let body = if text.trim().is_empty() {
            JsonValue::Null
        } else {
            serde_json::from_str(&text)?
        };

        Ok(ApiResponse {
            body,
            status,
            headers,
        })
    }
}
