//! Pagination types and traits

use crate::options::Meta;

/// Result of the next page computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPage {
    /// Another page should be fetched from this path
    Continue {
        /// Path including the advanced query string
        path: String,
    },
    /// No more pages
    Done,
}

impl NextPage {
    /// Create a continuation
    pub fn with_path(path: impl Into<String>) -> Self {
        Self::Continue { path: path.into() }
    }

    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Check if this is a continue result
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue { .. })
    }

    /// Path of the next request, if any
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Continue { path } => Some(path),
            Self::Done => None,
        }
    }
}

/// A decoded page of a list response
pub trait Paginated {
    /// The individual item type within a page
    type Item;

    /// Split the page into its items and its metadata
    fn into_parts(self) -> (Vec<Self::Item>, Meta);
}
