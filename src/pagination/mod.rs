//! Pagination module
//!
//! Follows the API's `meta.next` links to collect every page of a list.
//!
//! # Overview
//!
//! - [`next_page_request`] decides from a response's page metadata and the
//!   request's options whether another page should be fetched, and builds
//!   its path.
//! - [`list_all`] drives the fetch → accumulate → advance loop for any
//!   response type implementing [`Paginated`].

mod cursor;
mod driver;
mod types;

pub use cursor::next_page_request;
pub use driver::list_all;
pub use types::{NextPage, Paginated};

#[cfg(test)]
mod tests;
