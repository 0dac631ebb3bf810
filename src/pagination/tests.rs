//! Tests for pagination module

use super::cursor::strip_query;
use super::*;
use crate::error::{Error, Result};
use crate::options::{GetOptions, Meta};
use crate::types::Href;
use std::collections::VecDeque;
use tokio_util::sync::CancellationToken;

fn meta_with_next(next: &str, current_page: u32) -> Meta {
    Meta {
        next: Some(Href::new(next)),
        current_page_num: current_page,
        ..Meta::default()
    }
}

// ============================================================================
// NextPage Tests
// ============================================================================

#[test]
fn test_next_page_with_path() {
    let next = NextPage::with_path("/batches?page=2");
    assert!(next.is_continue());
    assert!(!next.is_done());
    assert_eq!(next.path(), Some("/batches?page=2"));
}

#[test]
fn test_next_page_done() {
    let next = NextPage::Done;
    assert!(next.is_done());
    assert_eq!(next.path(), None);
}

// ============================================================================
// strip_query Tests
// ============================================================================

#[test]
fn test_strip_query_relative() {
    assert_eq!(strip_query("/batches?foo=bar"), "/batches");
    assert_eq!(strip_query("/projects/p1/batches"), "/projects/p1/batches");
}

#[test]
fn test_strip_query_absolute_keeps_host() {
    assert_eq!(
        strip_query("https://api.example.com/metal/v1/batches?page=2&per_page=10"),
        "https://api.example.com/metal/v1/batches"
    );
}

#[test]
fn test_strip_query_malformed_is_empty() {
    assert_eq!(strip_query("http://[::1/batches?page=2"), "");
}

// ============================================================================
// next_page_request Tests
// ============================================================================

#[test]
fn test_next_page_request_advances_unpinned() {
    let meta = meta_with_next("/batches?foo=bar", 2);
    let mut opts = GetOptions::new();

    let next = next_page_request(&meta, Some(&mut opts));
    let path = next.path().expect("expected a next page");

    assert!(path.starts_with("/batches?"));
    assert!(path.contains("page=3"));
    assert!(!path.contains("foo=bar"));
    // The caller's options are not advanced
    assert_eq!(opts.page(), 0);
    assert!(opts.meta().is_none());
}

#[test]
fn test_next_page_request_absent_options() {
    let meta = meta_with_next("/batches?page=2", 1);
    let next = next_page_request(&meta, None);
    assert_eq!(next.path(), Some("/batches?page=2"));
}

#[test]
fn test_next_page_request_carries_filters_forward() {
    let meta = meta_with_next("/projects/p1/batches?page=2&include=junk", 1);
    let mut opts = GetOptions::new()
        .including(["facility"])
        .with_per_page(10)
        .with_search("db");

    let next = next_page_request(&meta, Some(&mut opts));
    assert_eq!(
        next.path(),
        Some("/projects/p1/batches?include=facility&page=2&per_page=10&search=db")
    );
}

#[test]
fn test_next_page_request_absolute_link() {
    let meta = meta_with_next("https://api.example.com/metal/v1/batches?page=5", 4);
    let next = next_page_request(&meta, None);
    assert_eq!(
        next.path(),
        Some("https://api.example.com/metal/v1/batches?page=5")
    );
}

#[test]
fn test_next_page_request_malformed_link_degrades_to_query_only() {
    let meta = meta_with_next("http://[::1/batches", 1);
    let next = next_page_request(&meta, None);
    assert_eq!(next.path(), Some("?page=2"));
}

#[test]
fn test_next_page_request_pinned_page_records_meta() {
    let meta = meta_with_next("/batches?foo=bar", 2);
    let mut opts = GetOptions::new().with_page(5);

    let next = next_page_request(&meta, Some(&mut opts));

    assert!(next.is_done());
    assert_eq!(opts.meta(), Some(&meta));
}

#[test]
fn test_next_page_request_page_overflow_stops() {
    let meta = meta_with_next("/batches", u32::MAX);
    let mut opts = GetOptions::new().with_per_page(10);

    let next = next_page_request(&meta, Some(&mut opts));

    assert!(next.is_done());
    assert_eq!(opts.meta(), Some(&meta));
    assert!(next_page_request(&meta, None).is_done());
}

#[test]
fn test_next_page_request_last_page_records_meta() {
    let meta = Meta {
        current_page_num: 3,
        last_page_num: 3,
        ..Meta::default()
    };
    let mut opts = GetOptions::new();

    assert!(next_page_request(&meta, Some(&mut opts)).is_done());
    assert_eq!(opts.meta(), Some(&meta));
    assert!(next_page_request(&meta, None).is_done());
}

// ============================================================================
// list_all Tests
// ============================================================================

#[derive(Debug)]
struct TestPage {
    items: Vec<u32>,
    meta: Meta,
}

impl Paginated for TestPage {
    type Item = u32;

    fn into_parts(self) -> (Vec<u32>, Meta) {
        (self.items, self.meta)
    }
}

#[tokio::test]
async fn test_list_all_follows_next_links() {
    let mut pages = VecDeque::from(vec![
        TestPage {
            items: vec![1, 2],
            meta: meta_with_next("/batches?page=2", 1),
        },
        TestPage {
            items: vec![3],
            meta: Meta {
                current_page_num: 2,
                ..Meta::default()
            },
        },
    ]);
    let mut calls = Vec::new();
    let cancel = CancellationToken::new();

    let items = list_all("/batches", None, &cancel, |path| {
        calls.push(path);
        let page = pages.pop_front();
        async move { page.ok_or_else(|| Error::http_status(500, "unexpected fetch")) }
    })
    .await
    .unwrap();

    assert_eq!(items, vec![1, 2, 3]);
    assert_eq!(calls, vec!["/batches", "/batches?page=2"]);
}

#[tokio::test]
async fn test_list_all_initial_path_uses_options() {
    let mut calls = Vec::new();
    let cancel = CancellationToken::new();
    let mut opts = GetOptions::new().including(["facility"]).with_per_page(10);

    let items = list_all("/batches", Some(&mut opts), &cancel, |path| {
        calls.push(path);
        async {
            Ok(TestPage {
                items: vec![7],
                meta: Meta::default(),
            })
        }
    })
    .await
    .unwrap();

    assert_eq!(items, vec![7]);
    assert_eq!(calls, vec!["/batches?include=facility&per_page=10"]);
    assert_eq!(opts.meta(), Some(&Meta::default()));
}

#[tokio::test]
async fn test_list_all_pinned_page_fetches_once() {
    let mut calls = 0;
    let cancel = CancellationToken::new();
    let mut opts = GetOptions::new().with_page(5);

    let items = list_all("/batches", Some(&mut opts), &cancel, |path| {
        calls += 1;
        assert_eq!(path, "/batches?page=5");
        async {
            Ok(TestPage {
                items: vec![50, 51],
                meta: meta_with_next("/batches?page=6", 5),
            })
        }
    })
    .await
    .unwrap();

    assert_eq!(items, vec![50, 51]);
    assert_eq!(calls, 1);
    assert_eq!(opts.meta().map(|m| m.current_page_num), Some(5));
}

#[tokio::test]
async fn test_list_all_error_discards_partial_results() {
    let mut calls = 0;
    let cancel = CancellationToken::new();

    let result = list_all("/batches", None, &cancel, |_path| {
        calls += 1;
        let first = calls == 1;
        async move {
            if first {
                Ok(TestPage {
                    items: vec![1, 2],
                    meta: meta_with_next("/batches?page=2", 1),
                })
            } else {
                Err(Error::http_status(500, "boom"))
            }
        }
    })
    .await;

    assert!(matches!(result, Err(Error::HttpStatus { status: 500, .. })));
    assert_eq!(calls, 2);
}

#[tokio::test]
async fn test_list_all_cancelled_before_start() {
    let cancel = CancellationToken::new();
    cancel.cancel();
    let mut calls = 0;

    let result: Result<Vec<u32>> = list_all("/batches", None, &cancel, |_path| {
        calls += 1;
        async {
            Ok(TestPage {
                items: vec![],
                meta: Meta::default(),
            })
        }
    })
    .await;

    assert!(matches!(result, Err(Error::Cancelled)));
    assert_eq!(calls, 0);
}

#[tokio::test]
async fn test_list_all_cancelled_during_fetch() {
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();

    let result = list_all("/batches", None, &cancel, move |_path| {
        trigger.cancel();
        std::future::pending::<Result<TestPage>>()
    })
    .await;

    assert!(matches!(result, Err(Error::Cancelled)));
}
