//! Pagination over a content source: cursor tracking and "load more".

mod controller;
mod source;

pub use controller::{LoadOutcome, LoadState, PageCursor, Paginator};
pub use source::{ContentSource, EntityKind, PageRequest, QueryFilter};
