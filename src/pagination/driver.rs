//! List driver: fetch pages until the cursor says stop

use super::cursor::next_page_request;
use super::types::{NextPage, Paginated};
use crate::error::{Error, Result};
use crate::options::{GetOptions, QueryAppender};
use std::future::Future;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Fetch every page of a list, starting at `base_path` with `opts`.
///
/// Pages are fetched one at a time, in order. The first error aborts the
/// listing and items gathered so far are dropped. If the caller pinned a
/// page in `opts`, only that page is fetched and its metadata is recorded
/// on `opts`. Cancelling `cancel` aborts before the next fetch or while a
/// fetch is in flight with [`Error::Cancelled`].
pub async fn list_all<P, F, Fut>(
    base_path: &str,
    mut opts: Option<&mut GetOptions>,
    cancel: &CancellationToken,
    mut fetch: F,
) -> Result<Vec<P::Item>>
where
    P: Paginated,
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<P>>,
{
    let mut path = opts.as_deref().with_query(base_path);
    let mut items = Vec::new();
    let mut page_count = 0usize;

    loop {
        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }

        let page = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(Error::Cancelled),
            result = fetch(path.clone()) => result?,
        };

        let (page_items, meta) = page.into_parts();
        page_count += 1;
        debug!(
            "Fetched page {} of {} ({} items)",
            page_count,
            base_path,
            page_items.len()
        );
        items.extend(page_items);

        match next_page_request(&meta, opts.as_deref_mut()) {
            NextPage::Continue { path: next } => path = next,
            NextPage::Done => break,
        }
    }

    Ok(items)
}
