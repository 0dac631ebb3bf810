//! Query string encoding for option sets
//!
//! Parameters are emitted in alphabetical key order:
//! `exclude, include, page, per_page, search, sort_by, sort_direction`.
//! List values are comma-joined before form-urlencoding, so the comma
//! itself appears as `%2C`. Empty and zero fields are left out.

use super::types::GetOptions;
use url::form_urlencoded;

/// Builds request paths from options.
///
/// Implemented for `GetOptions` and `Option<&GetOptions>`; an absent option
/// set behaves like an empty one.
pub trait QueryAppender {
    /// Encoded query string without the leading `?`
    fn encode(&self) -> String;

    /// `path` followed by `?` and the encoded query, or `path` unchanged
    /// when there is nothing to encode
    fn with_query(&self, path: &str) -> String {
        let params = self.encode();
        if params.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{params}")
        }
    }

    /// Pinned page, `0` when not pinned
    fn get_page(&self) -> u32;
}

impl QueryAppender for GetOptions {
    fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());

        if !self.excludes().is_empty() {
            serializer.append_pair("exclude", &self.excludes().join(","));
        }
        if !self.includes().is_empty() {
            serializer.append_pair("include", &self.includes().join(","));
        }
        if self.page() > 0 {
            serializer.append_pair("page", &self.page().to_string());
        }
        if self.per_page() > 0 {
            serializer.append_pair("per_page", &self.per_page().to_string());
        }
        if let Some(search) = self.search().filter(|s| !s.is_empty()) {
            serializer.append_pair("search", search);
        }
        if let Some(sort_by) = self.sort_by().filter(|s| !s.is_empty()) {
            serializer.append_pair("sort_by", sort_by);
        }
        if let Some(direction) = self.sort_direction() {
            serializer.append_pair("sort_direction", direction.as_str());
        }

        serializer.finish()
    }

    fn get_page(&self) -> u32 {
        self.page()
    }
}

impl QueryAppender for Option<&GetOptions> {
    fn encode(&self) -> String {
        match self {
            Some(opts) => opts.encode(),
            None => String::new(),
        }
    }

    fn get_page(&self) -> u32 {
        super::types::page_of(*self)
    }
}
