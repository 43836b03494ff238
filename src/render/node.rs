//! Render output types.

use crate::model::BlockStyle;
use serde::{Deserialize, Serialize};

/// One render instruction produced from a content block.
///
/// The sequence of nodes is the renderer's sole output; any view layer can
/// consume it directly or through its tagged JSON form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RenderNode {
    /// A paragraph (or heading/quote) of marked-up inline text.
    #[serde(rename_all = "camelCase")]
    Paragraph {
        /// Key of the source block
        key: String,
        /// Structural style of the paragraph
        style: BlockStyle,
        /// Escaped inline HTML with emphasis tags applied
        html: String,
    },

    /// An image with resolved source and alt text.
    #[serde(rename_all = "camelCase")]
    Image {
        /// Key of the source block
        key: String,
        /// Image source URL
        src: String,
        /// Alt text (never empty; falls back to the document title)
        alt: String,
        /// Optional caption
        caption: Option<String>,
    },

    /// An embeddable video player.
    #[serde(rename_all = "camelCase")]
    VideoEmbed {
        /// Key of the source block
        key: String,
        /// Extracted 11-character platform video id
        video_id: String,
        /// Ready-to-use embed URL
        embed_url: String,
        /// Optional title
        title: Option<String>,
        /// Optional caption
        caption: Option<String>,
    },

    /// A visible placeholder for a video whose URL could not be parsed.
    #[serde(rename_all = "camelCase")]
    VideoEmbedError {
        /// Key of the source block
        key: String,
        /// The original, unparseable URL
        source_url: String,
    },

    /// A styled callout box.
    #[serde(rename_all = "camelCase")]
    Callout {
        /// Key of the source block
        key: String,
        /// Escaped inline HTML of the callout body
        html: String,
        /// Background style, verbatim from the source block
        background_style: String,
        /// Border style, verbatim from the source block
        border_style: String,
        /// Padding, verbatim from the source block
        padding: String,
    },
}

impl RenderNode {
    /// Get the key of the source block this node was rendered from.
    pub fn key(&self) -> &str {
        match self {
            RenderNode::Paragraph { key, .. }
            | RenderNode::Image { key, .. }
            | RenderNode::VideoEmbed { key, .. }
            | RenderNode::VideoEmbedError { key, .. }
            | RenderNode::Callout { key, .. } => key,
        }
    }
}
