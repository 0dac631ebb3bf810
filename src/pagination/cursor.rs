//! Next-page computation from response metadata

use super::types::NextPage;
use crate::options::{page_of, GetOptions, Meta, QueryAppender};
use tracing::warn;
use url::{Position, Url};

/// Base used only to parse relative `next` links
const RELATIVE_LINK_BASE: &str = "http://relative.invalid";

/// Decide whether another page follows and build its path.
///
/// When `meta` carries a `next` link and the caller did not pin a page, the
/// options are copied with `page = current_page + 1` and encoded onto the
/// link's path. The link's own query string is discarded, so includes,
/// excludes, search, sort and page size always come from `opts`.
///
/// Otherwise pagination stops and `meta` is recorded on `opts` (if
/// present), which lets a caller that pinned a page inspect the result.
/// A `current_page` of `u32::MAX` also stops pagination.
pub fn next_page_request(meta: &Meta, opts: Option<&mut GetOptions>) -> NextPage {
    if let Some(next) = &meta.next {
        if page_of(opts.as_deref()) == 0 {
            match meta.current_page_num.checked_add(1) {
                Some(page) => {
                    let advanced = GetOptions::copy_or_new(opts.as_deref()).with_page(page);
                    return NextPage::with_path(advanced.with_query(&strip_query(&next.href)));
                }
                None => warn!(
                    "Stopping pagination: current page {} has no successor",
                    meta.current_page_num
                ),
            }
        }
    }

    if let Some(opts) = opts {
        opts.record_meta(meta.clone());
    }
    NextPage::Done
}

/// Remove the query component from a link.
///
/// Absolute links keep their scheme and host; relative links are reduced
/// to their path. A link that cannot be parsed yields an empty string
/// rather than an error, so pagination continues against the request's
/// base URL with only the encoded query.
pub(crate) fn strip_query(link: &str) -> String {
    match Url::parse(link) {
        Ok(mut url) => {
            url.set_query(None);
            url.to_string()
        }
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            match Url::parse(RELATIVE_LINK_BASE).and_then(|base| base.join(link)) {
                Ok(mut url) => {
                    url.set_query(None);
                    url[Position::BeforePath..].to_string()
                }
                Err(e) => {
                    warn!("Ignoring malformed next link '{}': {}", link, e);
                    String::new()
                }
            }
        }
        Err(e) => {
            warn!("Ignoring malformed next link '{}': {}", link, e);
            String::new()
        }
    }
}
