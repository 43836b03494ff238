//! # portext
//!
//! Content rendering for headless-CMS portals.
//!
//! This library transforms CMS-authored rich-content documents (ordered
//! sequences of typed blocks: text, image, video embed, highlight) into
//! render-ready node sequences, extracts plain-text excerpts with
//! word-boundary-aware truncation, and drives offset-based "load more"
//! pagination against an abstract content source.
//!
//! ## Quick Start
//!
//! ```
//! use portext::{render, ContentBlock, ContentDocument, RenderOptions, RichText};
//!
//! let mut doc = ContentDocument::new();
//! doc.push(ContentBlock::Text {
//!     key: "p1".into(),
//!     rich_text: RichText::Plain("Hello from the newsroom".into()),
//! });
//! doc.push(ContentBlock::VideoEmbed {
//!     key: "v1".into(),
//!     source_url: "https://youtu.be/dQw4w9WgXcQ".into(),
//!     title: None,
//!     caption: None,
//! });
//!
//! let nodes = render(&doc, &RenderOptions::default());
//! assert_eq!(nodes.len(), 2);
//!
//! let excerpt = portext::extract_plain_text(&doc, 160);
//! assert_eq!(excerpt, "Hello from the newsroom");
//! ```
//!
//! ## Features
//!
//! - **Total rendering**: malformed video URLs become visible placeholder
//!   nodes, unknown block kinds are skipped; rendering never fails
//! - **Excerpting**: mark-stripped plain text with word-boundary truncation
//! - **Pagination**: lookahead first page, sticky exhaustion, re-entrancy
//!   guard, failure states that keep already-loaded entries
//! - **Serde throughout**: CMS JSON in, tagged render-node JSON out

pub mod error;
pub mod model;
pub mod paginate;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    BlockStyle, ContentBlock, ContentDocument, ContentEntry, RichText, RichTextNode, Span,
    SpanMarks,
};
pub use paginate::{
    ContentSource, EntityKind, LoadOutcome, LoadState, PageCursor, PageRequest, Paginator,
    QueryFilter,
};
pub use render::{
    extract_plain_text, flatten, render, BlockRenderer, RenderNode, RenderOptions,
    VideoIdExtractor,
};

/// Parse a content document from CMS JSON.
///
/// # Example
///
/// ```
/// let json = r#"[{"kind": "text", "key": "p1", "richText": "Breaking news"}]"#;
/// let doc = portext::parse_document(json).unwrap();
/// assert_eq!(doc.len(), 1);
/// ```
pub fn parse_document(json: &str) -> Result<ContentDocument> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a full content entry (id, title, timestamps, body) from CMS JSON.
pub fn parse_entry(json: &str) -> Result<ContentEntry> {
    Ok(serde_json::from_str(json)?)
}
