//! Request options module
//!
//! Option sets control include/exclude expansion, sorting, search and
//! paging for GET and list requests, and encode themselves into a URL
//! query string.
//!
//! # Overview
//!
//! - [`GetOptions`] is a plain value. Every transformation returns a new
//!   value, so a caller's options are never changed behind its back.
//! - Absent options are `Option<&GetOptions>`. The [`QueryAppender`] trait
//!   is implemented for both forms so request paths can be built the same
//!   way whether or not the caller supplied options.
//! - [`Meta`] is the page metadata returned alongside list results.

mod encode;
mod types;

pub use encode::QueryAppender;
pub use types::{page_of, GetOptions, ListOptions, Meta, SearchOptions, SortDirection};
