//! API client facade
//!
//! Owns the transport and a cancellation token, and hands out services.

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{ApiResponse, HttpClient, Transport};
use crate::services::BatchService;
use crate::types::{JsonValue, Method};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Metal API client
#[derive(Debug)]
pub struct Client {
    http: HttpClient,
    cancel: CancellationToken,
}

impl Client {
    /// Build a client from a validated configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        debug!("Creating client for {}", config.api_url);
        Ok(Self::with_http(HttpClient::with_config(config.http_config())?))
    }

    /// Build a client from `METAL_AUTH_TOKEN` / `METAL_API_URL`
    pub fn from_env() -> Result<Self> {
        Self::new(&ClientConfig::from_env())
    }

    /// Wrap an already configured transport
    pub fn with_http(http: HttpClient) -> Self {
        Self {
            http,
            cancel: CancellationToken::new(),
        }
    }

    /// Token that aborts every in-flight and future call of this client
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Abort all calls made through this client
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Batch operations
    pub fn batches(&self) -> BatchService<'_, Self> {
        BatchService::new(self, self.cancel.child_token())
    }
}

#[async_trait]
impl Transport for Client {
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<JsonValue>,
        cancel: &CancellationToken,
    ) -> Result<ApiResponse<JsonValue>> {
        debug!("{} {}", method, path);
        self.http.send(method, path, body, cancel).await
    }
}
