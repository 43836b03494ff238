//! Document model types for CMS content representation.

mod block;
mod document;
mod entry;

pub use block::{BlockStyle, ContentBlock, RichText, RichTextNode, Span, SpanMarks};
pub use document::ContentDocument;
pub use entry::ContentEntry;
