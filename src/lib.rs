//! # Metal API client
//!
//! Async client for the Equinix Metal bare-metal provisioning API.
//!
//! ## Features
//!
//! - **Option sets**: include/exclude expansion, search, sorting and paging
//!   encoded into request query strings
//! - **Auto-pagination**: list calls follow `meta.next` links until the last
//!   page, unless a page is pinned
//! - **Cancellation**: every call races a `CancellationToken`
//! - **Transport**: retries, backoff and client-side rate limiting
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use metal_api::{Client, ListOptions, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // Reads METAL_AUTH_TOKEN and METAL_API_URL
//!     let client = Client::from_env()?;
//!
//!     let mut opts = ListOptions::new().including(["facilities"]).with_per_page(50);
//!     let batches = client.batches().list("project-id", Some(&mut opts)).await?;
//!
//!     for batch in &batches {
//!         println!("{} {}", batch.id, batch.state);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │  Client ── batches() ──► BatchService (get/list/create/…) │
//! └───────────────────────────────────────────────────────────┘
//!        │                         │
//! ┌──────┴──────┬──────────────────┴─────┬───────────────────┐
//! │  Options    │  Pagination            │  HTTP Transport   │
//! ├─────────────┼────────────────────────┼───────────────────┤
//! │ include     │ next_page_request      │ retry / backoff   │
//! │ exclude     │ list_all               │ rate limit        │
//! │ page, sort  │                        │ cancellation      │
//! └─────────────┴────────────────────────┴───────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Request option sets and query encoding
pub mod options;

/// Next-page computation and the list driver
pub mod pagination;

/// HTTP transport with retry and rate limiting
pub mod http;

/// Resource base paths
pub mod paths;

/// Resource services
pub mod services;

/// Client configuration
pub mod config;

/// Client facade
pub mod client;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::Client;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use options::{GetOptions, ListOptions, Meta, QueryAppender, SearchOptions, SortDirection};
pub use services::{Batch, BatchCreateDevice, BatchDeviceCreateRequest, DeviceCreateRequest};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
