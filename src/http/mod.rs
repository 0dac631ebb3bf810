//! HTTP transport module
//!
//! Issues requests against the API and decodes JSON responses.
//!
//! # Features
//!
//! - **Automatic Retries**: Configurable retry logic with backoff
//! - **Rate Limiting**: Token bucket rate limiter using governor
//! - **Cancellation**: Every request races a `CancellationToken`
//! - **Transport trait**: The seam services are written against

mod client;
mod rate_limit;
mod transport;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
pub use transport::{ApiResponse, Transport};

/// Header carrying the API token
pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

#[cfg(test)]
mod tests;
