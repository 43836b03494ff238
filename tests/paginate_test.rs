//! Integration tests for the pagination controller.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use portext::{
    ContentEntry, ContentSource, EntityKind, Error, LoadOutcome, LoadState, PageRequest, Paginator,
    QueryFilter, Result,
};

fn entries(count: usize, start: usize) -> Vec<ContentEntry> {
    let published: DateTime<Utc> = "2024-06-12T08:30:00Z".parse().unwrap();
    (start..start + count)
        .map(|i| ContentEntry::new(format!("article-{}", i), format!("Headline {}", i), published))
        .collect()
}

/// Scripted content source: returns queued pages in order and records every
/// request it receives.
struct ScriptedSource {
    calls: AtomicUsize,
    pages: Mutex<VecDeque<std::result::Result<Vec<ContentEntry>, String>>>,
    requests: Mutex<Vec<PageRequest>>,
}

impl ScriptedSource {
    fn new(pages: Vec<std::result::Result<Vec<ContentEntry>, String>>) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            pages: Mutex::new(pages.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn requests(&self) -> Vec<PageRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentSource for ScriptedSource {
    async fn fetch_page(&self, request: &PageRequest) -> Result<Vec<ContentEntry>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        // Yield so that a concurrently started load can observe Loading.
        tokio::task::yield_now().await;
        let page = self.pages.lock().unwrap().pop_front();
        match page {
            Some(Ok(entries)) => Ok(entries),
            Some(Err(message)) => Err(Error::Fetch(message)),
            None => Ok(Vec::new()),
        }
    }
}

#[tokio::test]
async fn short_first_page_exhausts_without_further_calls() {
    let source = ScriptedSource::new(vec![Ok(entries(4, 0))]);
    let paginator = Paginator::new(source.clone(), 6).unwrap();

    let outcome = paginator
        .load_first(EntityKind::Article, QueryFilter::category("national"))
        .await
        .unwrap();
    assert_eq!(outcome, LoadOutcome::Loaded(4));
    assert!(paginator.is_exhausted());
    assert_eq!(paginator.state(), LoadState::Ready);

    // Exhausted: no network call is made.
    let outcome = paginator.load_more().await.unwrap();
    assert_eq!(outcome, LoadOutcome::Exhausted);
    assert_eq!(source.call_count(), 1);
}

#[tokio::test]
async fn lookahead_scenario_page_size_six() {
    let source = ScriptedSource::new(vec![Ok(entries(7, 0)), Ok(entries(3, 6))]);
    let paginator = Paginator::new(source.clone(), 6).unwrap();

    // First load requests page_size + 1 and stores only page_size.
    paginator
        .load_first(EntityKind::Article, QueryFilter::category("sports"))
        .await
        .unwrap();
    assert_eq!(paginator.item_count(), 6);
    assert!(!paginator.is_exhausted());

    let first_request = &source.requests()[0];
    assert_eq!(first_request.offset, 0);
    assert_eq!(first_request.limit, 7);

    // Load more appends 3 and exhausts.
    let outcome = paginator.load_more().await.unwrap();
    assert_eq!(outcome, LoadOutcome::Loaded(3));
    assert_eq!(paginator.item_count(), 9);
    assert!(paginator.is_exhausted());

    let second_request = &source.requests()[1];
    assert_eq!(second_request.offset, 6);
    assert_eq!(second_request.limit, 6);
}

#[tokio::test]
async fn concurrent_load_more_makes_one_call() {
    let source = ScriptedSource::new(vec![Ok(entries(7, 0)), Ok(entries(6, 6))]);
    let paginator = Paginator::new(source.clone(), 6).unwrap();
    paginator
        .load_first(EntityKind::Article, QueryFilter::default())
        .await
        .unwrap();
    assert_eq!(source.call_count(), 1);

    let (first, second) = tokio::join!(paginator.load_more(), paginator.load_more());
    let outcomes = [first.unwrap(), second.unwrap()];

    assert_eq!(source.call_count(), 2);
    assert!(outcomes.contains(&LoadOutcome::Loaded(6)));
    assert!(outcomes.contains(&LoadOutcome::AlreadyLoading));
    assert_eq!(paginator.item_count(), 12);
}

#[tokio::test]
async fn failure_preserves_items_and_retry_requests_same_page() {
    let source = ScriptedSource::new(vec![
        Ok(entries(7, 0)),
        Err("gateway timeout".to_string()),
        Ok(entries(2, 6)),
    ]);
    let paginator = Paginator::new(source.clone(), 6).unwrap();
    paginator
        .load_first(EntityKind::Article, QueryFilter::search("flood"))
        .await
        .unwrap();

    // The second fetch fails; loaded entries survive.
    let err = paginator.load_more().await.unwrap_err();
    assert!(matches!(err, Error::Fetch(_)));
    assert_eq!(paginator.item_count(), 6);
    assert_eq!(
        paginator.error().as_deref(),
        Some("Content fetch failed: gateway timeout")
    );

    // Retry re-requests the same offset and recovers.
    let outcome = paginator.retry().await.unwrap();
    assert_eq!(outcome, LoadOutcome::Loaded(2));
    assert_eq!(paginator.item_count(), 8);
    assert!(paginator.is_exhausted());
    assert_eq!(paginator.state(), LoadState::Ready);

    let requests = source.requests();
    assert_eq!(requests[1].offset, 6);
    assert_eq!(requests[2].offset, 6);
}

#[tokio::test]
async fn failed_first_load_retries_with_lookahead() {
    let source = ScriptedSource::new(vec![Err("offline".to_string()), Ok(entries(2, 0))]);
    let paginator = Paginator::new(source.clone(), 6).unwrap();

    let err = paginator
        .load_first(EntityKind::Video, QueryFilter::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Fetch(_)));
    assert_eq!(paginator.state(), LoadState::Failed("Content fetch failed: offline".into()));

    let outcome = paginator.retry().await.unwrap();
    assert_eq!(outcome, LoadOutcome::Loaded(2));
    assert!(paginator.is_exhausted());

    // Both attempts were first-page requests with the lookahead limit.
    let requests = source.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].offset, 0);
    assert_eq!(requests[1].limit, 7);
    assert_eq!(requests[1].entity_kind, EntityKind::Video);
}

#[tokio::test]
async fn overflowing_source_is_clamped() {
    // Source misbehaves and returns 10 entries for a limit of 7.
    let source = ScriptedSource::new(vec![Ok(entries(10, 0))]);
    let paginator = Paginator::new(source.clone(), 6).unwrap();

    paginator
        .load_first(EntityKind::Article, QueryFilter::default())
        .await
        .unwrap();
    // Clamped to the lookahead limit, then trimmed to the page size.
    assert_eq!(paginator.item_count(), 6);
    assert!(!paginator.is_exhausted());
}

#[tokio::test]
async fn new_query_resets_cursor_and_items() {
    let source = ScriptedSource::new(vec![Ok(entries(3, 0)), Ok(entries(7, 0))]);
    let paginator = Paginator::new(source.clone(), 6).unwrap();

    paginator
        .load_first(EntityKind::Article, QueryFilter::category("old"))
        .await
        .unwrap();
    assert_eq!(paginator.item_count(), 3);
    assert!(paginator.is_exhausted());

    // Exhaustion is per query: a fresh query starts a fresh cursor.
    paginator
        .load_first(EntityKind::Article, QueryFilter::category("new"))
        .await
        .unwrap();
    assert_eq!(paginator.item_count(), 6);
    assert!(!paginator.is_exhausted());
    assert_eq!(paginator.cursor().unwrap().offset, 6);
}

#[tokio::test]
async fn load_more_before_load_first_is_an_error() {
    let source = ScriptedSource::new(vec![]);
    let paginator = Paginator::new(source.clone(), 6).unwrap();

    assert!(paginator.load_more().await.is_err());
    assert_eq!(source.call_count(), 0);
}

#[test]
fn zero_page_size_is_rejected() {
    let source = ScriptedSource::new(vec![]);
    assert!(matches!(
        Paginator::new(source, 0),
        Err(Error::InvalidPageSize)
    ));
}
