//! Option set and page metadata types

use crate::types::Href;
use serde::{Deserialize, Serialize};

/// Sort direction for list requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Query string value
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SortDirection {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(crate::error::Error::config(format!(
                "sort direction must be 'asc' or 'desc', got '{other}'"
            ))),
        }
    }
}

/// Pagination metadata envelope returned with list responses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<Href>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<Href>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<Href>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<Href>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<Href>,
    #[serde(default)]
    pub total: u32,
    #[serde(rename = "current_page", default)]
    pub current_page_num: u32,
    #[serde(rename = "last_page", default)]
    pub last_page_num: u32,
}

impl Meta {
    /// Whether the server reported another page
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

/// Options common to GET and list requests.
///
/// For resources that contain collections of other resources, the API only
/// returns the `href` of each nested resource by default. Naming a field in
/// `includes` expands it inline; field specifiers use dotted notation up to
/// three references deep (e.g. `"memberships.projects"`). `excludes` does
/// the opposite for fields the endpoint expands by default.
///
/// `page == 0` means the caller did not pin a page, and list calls follow
/// the server's `next` links until the last page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetOptions {
    includes: Vec<String>,
    excludes: Vec<String>,
    page: u32,
    per_page: u32,
    search: Option<String>,
    sort_by: Option<String>,
    sort_direction: Option<SortDirection>,
    meta: Option<Meta>,
}

/// Options for list requests
pub type ListOptions = GetOptions;

/// Options for search requests
pub type SearchOptions = GetOptions;

impl GetOptions {
    /// Create an empty option set
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of `opts`, or an empty option set when absent
    pub fn copy_or_new(opts: Option<&Self>) -> Self {
        match opts {
            Some(opts) => opts.clone(),
            None => Self::default(),
        }
    }

    /// Copy with `refs` appended to the includes, skipping ones already present.
    ///
    /// Unknown field names are passed through; the API ignores them.
    #[must_use]
    pub fn including<I, S>(&self, refs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ret = self.clone();
        append_unique(&mut ret.includes, refs);
        ret
    }

    /// Copy with `refs` appended to the excludes, skipping ones already present
    #[must_use]
    pub fn excluding<I, S>(&self, refs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ret = self.clone();
        append_unique(&mut ret.excludes, refs);
        ret
    }

    /// Pin a page (`0` unpins)
    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Set the page size (`0` uses the server default)
    #[must_use]
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Set the search keyword
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Sort by a field in the given direction
    #[must_use]
    pub fn with_sort(mut self, sort_by: impl Into<String>, direction: SortDirection) -> Self {
        self.sort_by = Some(sort_by.into());
        self.sort_direction = Some(direction);
        self
    }

    /// Sort by a field, leaving the direction to the server
    #[must_use]
    pub fn with_sort_by(mut self, sort_by: impl Into<String>) -> Self {
        self.sort_by = Some(sort_by.into());
        self
    }

    /// Set the sort direction, leaving the field to the server
    #[must_use]
    pub fn with_sort_direction(mut self, direction: SortDirection) -> Self {
        self.sort_direction = Some(direction);
        self
    }

    pub fn includes(&self) -> &[String] {
        &self.includes
    }

    pub fn excludes(&self) -> &[String] {
        &self.excludes
    }

    /// Pinned page, `0` if not pinned
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn sort_by(&self) -> Option<&str> {
        self.sort_by.as_deref()
    }

    pub fn sort_direction(&self) -> Option<SortDirection> {
        self.sort_direction
    }

    /// Page metadata from the last response that stopped pagination
    pub fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }

    /// Record the page metadata of a completed request
    pub fn record_meta(&mut self, meta: Meta) {
        self.meta = Some(meta);
    }
}

/// Page of an optional option set; `0` when absent
pub fn page_of(opts: Option<&GetOptions>) -> u32 {
    match opts {
        Some(opts) => opts.page,
        None => 0,
    }
}

fn append_unique<I, S>(set: &mut Vec<String>, refs: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    for value in refs {
        let value = value.into();
        if !set.contains(&value) {
            set.push(value);
        }
    }
}
