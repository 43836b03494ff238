//! Document-level types.

use super::ContentBlock;
use serde::{Deserialize, Serialize};

/// An ordered sequence of content blocks.
///
/// Insertion order is display order and is preserved through every transform.
/// A document has no lifecycle of its own; it is owned by the article or video
/// entry that embeds it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentDocument {
    /// Blocks in display order
    pub blocks: Vec<ContentBlock>,
}

impl ContentDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Get the number of blocks in the document.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the document has any blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Append a block to the document.
    pub fn push(&mut self, block: ContentBlock) {
        self.blocks.push(block);
    }

    /// Iterate over the blocks in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, ContentBlock> {
        self.blocks.iter()
    }
}

impl From<Vec<ContentBlock>> for ContentDocument {
    fn from(blocks: Vec<ContentBlock>) -> Self {
        Self { blocks }
    }
}

impl FromIterator<ContentBlock> for ContentDocument {
    fn from_iter<I: IntoIterator<Item = ContentBlock>>(iter: I) -> Self {
        Self {
            blocks: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ContentDocument {
    type Item = &'a ContentBlock;
    type IntoIter = std::slice::Iter<'a, ContentBlock>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
