//! Incremental "load more" pagination over a content source.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{Error, Result};
use crate::model::ContentEntry;

use super::{ContentSource, EntityKind, PageRequest, QueryFilter};

/// Load state of a [`Paginator`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// No load has been started yet
    #[default]
    Idle,
    /// A fetch is in flight; further load calls are no-ops
    Loading,
    /// The last load completed successfully
    Ready,
    /// The last load failed; the message is suitable for display
    Failed(String),
}

/// Cursor into a server-side result set.
///
/// `offset` only ever grows, by the count of entries actually stored, and
/// `exhausted` is sticky: once true it stays true for the life of the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    /// Zero-based offset of the next page
    pub offset: usize,
    /// Requested page size
    pub page_size: usize,
    /// Whether the result set has been fully consumed
    pub exhausted: bool,
}

impl PageCursor {
    fn new(page_size: usize) -> Self {
        Self {
            offset: 0,
            page_size,
            exhausted: false,
        }
    }
}

/// Outcome of a load call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// This many new entries were appended
    Loaded(usize),
    /// Another load was already in flight; no request was made
    AlreadyLoading,
    /// The cursor is exhausted; no request was made
    Exhausted,
}

#[derive(Default)]
struct Inner {
    state: LoadState,
    cursor: Option<PageCursor>,
    items: Vec<ContentEntry>,
    query: Option<(EntityKind, QueryFilter)>,
    // True once the first page of the current query has loaded successfully;
    // decides whether retry() re-runs the first load or a load-more.
    primed: bool,
}

/// Stateful controller for one browsing session's pagination.
///
/// All methods take `&self`; state lives behind a mutex that is never held
/// across an await, so a second load call while one is in flight observes
/// `Loading` and returns without touching the network.
pub struct Paginator {
    source: Arc<dyn ContentSource>,
    page_size: usize,
    inner: Mutex<Inner>,
}

impl Paginator {
    /// Create a paginator over a content source.
    pub fn new(source: Arc<dyn ContentSource>, page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(Error::InvalidPageSize);
        }
        Ok(Self {
            source,
            page_size,
            inner: Mutex::new(Inner::default()),
        })
    }

    /// Load the first page of a new query, discarding any previous query.
    ///
    /// Requests `page_size + 1` entries; the extra entry is a lookahead used
    /// only to decide `exhausted` without a second round trip and is not
    /// stored or displayed.
    pub async fn load_first(&self, kind: EntityKind, filter: QueryFilter) -> Result<LoadOutcome> {
        let request = {
            let mut inner = self.lock();
            if inner.state == LoadState::Loading {
                return Ok(LoadOutcome::AlreadyLoading);
            }
            inner.state = LoadState::Loading;
            inner.cursor = Some(PageCursor::new(self.page_size));
            inner.query = Some((kind, filter.clone()));
            inner.primed = false;
            PageRequest {
                entity_kind: kind,
                filter,
                offset: 0,
                limit: self.page_size + 1,
            }
        };

        log::debug!("Loading first page at limit {}", request.limit);
        let fetched = self.source.fetch_page(&request).await;

        let mut inner = self.lock();
        match fetched {
            Ok(mut entries) => {
                clamp_overflow(&mut entries, request.limit);
                let exhausted = entries.len() <= self.page_size;
                entries.truncate(self.page_size);
                let count = entries.len();

                inner.items = entries;
                inner.cursor = Some(PageCursor {
                    offset: count,
                    page_size: self.page_size,
                    exhausted,
                });
                inner.primed = true;
                inner.state = LoadState::Ready;
                Ok(LoadOutcome::Loaded(count))
            }
            Err(err) => {
                // Entries accumulated before this call are kept for display.
                inner.state = LoadState::Failed(err.to_string());
                Err(err)
            }
        }
    }

    /// Load the next page of the current query and append it.
    ///
    /// A no-op while a load is in flight or once the cursor is exhausted;
    /// neither case makes a network call.
    pub async fn load_more(&self) -> Result<LoadOutcome> {
        let request = {
            let mut inner = self.lock();
            if inner.state == LoadState::Loading {
                return Ok(LoadOutcome::AlreadyLoading);
            }
            let (kind, filter) = inner
                .query
                .clone()
                .ok_or_else(|| Error::Other("no active query; call load_first first".into()))?;
            if !inner.primed {
                return Err(Error::Other(
                    "first page has not loaded; retry load_first".into(),
                ));
            }
            let cursor = inner.cursor.unwrap_or_else(|| PageCursor::new(self.page_size));
            if cursor.exhausted {
                return Ok(LoadOutcome::Exhausted);
            }
            inner.state = LoadState::Loading;
            PageRequest {
                entity_kind: kind,
                filter,
                offset: cursor.offset,
                limit: self.page_size,
            }
        };

        log::debug!("Loading more at offset {}", request.offset);
        let fetched = self.source.fetch_page(&request).await;

        let mut inner = self.lock();
        match fetched {
            Ok(mut entries) => {
                clamp_overflow(&mut entries, request.limit);
                let count = entries.len();
                let exhausted = count < request.limit;

                inner.items.append(&mut entries);
                if let Some(cursor) = inner.cursor.as_mut() {
                    cursor.offset += count;
                    cursor.exhausted = exhausted;
                }
                inner.state = LoadState::Ready;
                Ok(LoadOutcome::Loaded(count))
            }
            Err(err) => {
                // Offset is untouched, so a retry re-requests the same page.
                inner.state = LoadState::Failed(err.to_string());
                Err(err)
            }
        }
    }

    /// Re-attempt the load that failed, without corrupting the cursor.
    pub async fn retry(&self) -> Result<LoadOutcome> {
        let (primed, query) = {
            let inner = self.lock();
            match inner.state {
                LoadState::Failed(_) => {}
                LoadState::Loading => return Ok(LoadOutcome::AlreadyLoading),
                _ => return Err(Error::Other("nothing to retry".into())),
            }
            (inner.primed, inner.query.clone())
        };

        let (kind, filter) =
            query.ok_or_else(|| Error::Other("no active query; call load_first first".into()))?;
        if primed {
            self.load_more().await
        } else {
            self.load_first(kind, filter).await
        }
    }

    /// Current load state.
    pub fn state(&self) -> LoadState {
        self.lock().state.clone()
    }

    /// Display message of the last failure, if the paginator is in `Failed`.
    pub fn error(&self) -> Option<String> {
        match &self.lock().state {
            LoadState::Failed(message) => Some(message.clone()),
            _ => None,
        }
    }

    /// Snapshot of the accumulated entries, in arrival order.
    pub fn items(&self) -> Vec<ContentEntry> {
        self.lock().items.clone()
    }

    /// Number of accumulated entries.
    pub fn item_count(&self) -> usize {
        self.lock().items.len()
    }

    /// Whether the current query's result set is fully consumed.
    pub fn is_exhausted(&self) -> bool {
        self.lock()
            .cursor
            .map(|cursor| cursor.exhausted)
            .unwrap_or(false)
    }

    /// Current cursor, if a query has been started.
    pub fn cursor(&self) -> Option<PageCursor> {
        self.lock().cursor
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A poisoned lock means a panic mid-update elsewhere; the state is
        // still structurally valid, so continue with it.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Defensive clamp: a source returning more than requested is a contract
/// violation; keep the requested count rather than propagate the overflow.
fn clamp_overflow(entries: &mut Vec<ContentEntry>, requested: usize) {
    if entries.len() > requested {
        log::warn!(
            "Content source returned {} entries for a request of {}; clamping",
            entries.len(),
            requested
        );
        entries.truncate(requested);
    }
}
