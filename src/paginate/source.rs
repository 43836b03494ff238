//! The content source collaborator and its request types.

use crate::error::Result;
use crate::model::ContentEntry;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Kind of entry a page request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// News article
    Article,
    /// Video entry
    Video,
}

/// Filter portion of a page request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryFilter {
    /// Restrict to a category slug
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Full-text search term
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,

    /// Entry id to exclude (e.g. the article currently open)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_id: Option<String>,
}

impl QueryFilter {
    /// Filter by category slug.
    pub fn category(slug: impl Into<String>) -> Self {
        Self {
            category: Some(slug.into()),
            ..Default::default()
        }
    }

    /// Filter by search term.
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search_term: Some(term.into()),
            ..Default::default()
        }
    }

    /// Exclude an entry id from the results.
    pub fn excluding(mut self, id: impl Into<String>) -> Self {
        self.exclude_id = Some(id.into());
        self
    }
}

/// One page request against the content source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    /// Kind of entry to fetch
    pub entity_kind: EntityKind,

    /// Query filter
    pub filter: QueryFilter,

    /// Zero-based offset into the result set
    pub offset: usize,

    /// Maximum number of entries to return
    pub limit: usize,
}

/// Collaborator that executes page queries against the content backend.
///
/// How the query is built and executed (query language, transport, caching,
/// retries) is the implementor's concern; this crate only consumes the
/// returned entry sequence. Implementations must return entries in a stable
/// order so that consecutive offsets paginate the same result set.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch one page of entries.
    async fn fetch_page(&self, request: &PageRequest) -> Result<Vec<ContentEntry>>;
}
