//! Error types for the portext library.

use std::io;
use thiserror::Error;

/// Result type alias for portext operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while fetching or decoding content.
///
/// Rendering and excerpting are total and never produce errors; malformed
/// blocks degrade to placeholders or are skipped instead.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error decoding content JSON.
    #[error("Content decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The content source rejected or failed a page fetch.
    #[error("Content fetch failed: {0}")]
    Fetch(String),

    /// A paginator was constructed with a zero page size.
    #[error("Page size must be positive")]
    InvalidPageSize,

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
