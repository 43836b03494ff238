//! Plain-text extraction for previews, excerpts, and meta descriptions.

use crate::model::{ContentBlock, ContentDocument};
use unicode_normalization::UnicodeNormalization;

/// Proportion of `max_length` past which a backtracked space is considered
/// close enough to the cut point to truncate at a word boundary.
const TAIL_HEURISTIC: f64 = 0.8;

const ELLIPSIS: &str = "...";

/// Flatten a document to a single line of plain text.
///
/// Only text and highlight blocks contribute; marks are stripped, whitespace
/// runs collapse to one space, and the result is NFC-normalized and trimmed.
pub fn flatten(doc: &ContentDocument) -> String {
    let joined = doc
        .iter()
        .filter_map(|block| match block {
            ContentBlock::Text { rich_text, .. } | ContentBlock::Highlight { rich_text, .. } => {
                Some(rich_text.plain_text())
            }
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(" ");

    let normalized: String = joined.nfc().collect();
    normalized.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extract a plain-text excerpt of at most `max_length` characters
/// (plus a trailing ellipsis when truncated).
///
/// Truncation is word-boundary aware: the text is cut to `max_length - 3`
/// characters and the cut backtracks to the last space, but only when that
/// space falls past 80% of `max_length` — otherwise the hard cut stands.
/// Counting is in characters, so a multi-byte character is never split.
/// Pure and deterministic; an empty document yields an empty string.
pub fn extract_plain_text(doc: &ContentDocument, max_length: usize) -> String {
    truncate_at_word(&flatten(doc), max_length)
}

fn truncate_at_word(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }

    let window: String = text.chars().take(max_length.saturating_sub(3)).collect();
    let threshold = (max_length as f64 * TAIL_HEURISTIC) as usize;

    let cut = match window.rfind(' ') {
        Some(space) if window[..space].chars().count() >= threshold => &window[..space],
        _ => window.as_str(),
    };

    let mut out = cut.trim_end().to_string();
    out.push_str(ELLIPSIS);
    out
}
