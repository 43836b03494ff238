//! Content block and rich-text types.

use serde::{Deserialize, Serialize};

/// One unit of CMS-authored rich content.
///
/// Blocks arrive from the content API as JSON objects discriminated by a
/// `kind` field. Kinds this library does not know about deserialize into
/// [`ContentBlock::Unknown`] instead of failing the whole document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ContentBlock {
    /// A rich-text block (paragraphs, headings, quotes).
    #[serde(rename_all = "camelCase")]
    Text {
        /// Stable identity across re-renders
        key: String,
        /// The block's rich-text payload
        rich_text: RichText,
    },

    /// An image with alt text and an optional caption.
    #[serde(rename_all = "camelCase")]
    Image {
        /// Stable identity across re-renders
        key: String,
        /// Resolved image source URL or asset reference
        image_ref: String,
        /// Alternative text; may be empty in authored content
        #[serde(default)]
        alt_text: String,
        /// Optional caption shown under the image
        #[serde(default)]
        caption: Option<String>,
    },

    /// An embedded video identified by its platform URL.
    #[serde(rename_all = "camelCase")]
    VideoEmbed {
        /// Stable identity across re-renders
        key: String,
        /// The authored video URL, in any of the platform's shapes
        source_url: String,
        /// Optional title
        #[serde(default)]
        title: Option<String>,
        /// Optional caption
        #[serde(default)]
        caption: Option<String>,
    },

    /// A highlighted callout carrying rich text plus styling attributes.
    #[serde(rename_all = "camelCase")]
    Highlight {
        /// Stable identity across re-renders
        key: String,
        /// The callout's rich-text payload
        rich_text: RichText,
        /// Background style, carried through verbatim
        #[serde(default)]
        background_style: String,
        /// Border style, carried through verbatim
        #[serde(default)]
        border_style: String,
        /// Padding, carried through verbatim
        #[serde(default)]
        padding: String,
    },

    /// A block kind this library does not recognize. The renderer skips it.
    #[serde(other)]
    Unknown,
}

impl ContentBlock {
    /// Get the block's key, if it has one.
    pub fn key(&self) -> Option<&str> {
        match self {
            ContentBlock::Text { key, .. }
            | ContentBlock::Image { key, .. }
            | ContentBlock::VideoEmbed { key, .. }
            | ContentBlock::Highlight { key, .. } => Some(key),
            ContentBlock::Unknown => None,
        }
    }

    /// Check whether this block contributes plain text to excerpts.
    pub fn has_text(&self) -> bool {
        matches!(
            self,
            ContentBlock::Text { .. } | ContentBlock::Highlight { .. }
        )
    }
}

/// Rich-text payload of a text or highlight block.
///
/// Current content is a sequence of [`RichTextNode`]s; legacy entries store a
/// bare string, which is accepted as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RichText {
    /// Structured rich text
    Nodes(Vec<RichTextNode>),
    /// Legacy bare-string payload
    Plain(String),
}

impl RichText {
    /// Flatten to plain text with all marks stripped.
    pub fn plain_text(&self) -> String {
        match self {
            RichText::Plain(s) => s.clone(),
            RichText::Nodes(nodes) => nodes
                .iter()
                .map(RichTextNode::plain_text)
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    /// Check whether the payload contains no text at all.
    pub fn is_empty(&self) -> bool {
        match self {
            RichText::Plain(s) => s.trim().is_empty(),
            RichText::Nodes(nodes) => nodes.iter().all(|n| n.plain_text().trim().is_empty()),
        }
    }
}

/// One node of rich text: either an inline span or a one-level structural
/// block whose children are always spans (no nested structural blocks).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RichTextNode {
    /// An inline run of text with marks
    Span(Span),

    /// A structural block (paragraph, heading, quote) of spans
    #[serde(rename_all = "camelCase")]
    Block {
        /// Structural style
        #[serde(default)]
        style: BlockStyle,
        /// Child spans, in display order
        children: Vec<Span>,
    },
}

impl RichTextNode {
    /// Flatten this node to plain text, marks stripped.
    pub fn plain_text(&self) -> String {
        match self {
            RichTextNode::Span(span) => span.text.clone(),
            RichTextNode::Block { children, .. } => {
                children.iter().map(|s| s.text.as_str()).collect()
            }
        }
    }
}

/// A run of text with consistent marks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Span {
    /// The text content
    pub text: String,

    /// Marks applied to the run
    #[serde(default)]
    pub marks: SpanMarks,
}

impl Span {
    /// Create an unmarked span.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marks: SpanMarks::default(),
        }
    }

    /// Create a bold span.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marks: SpanMarks {
                bold: true,
                ..Default::default()
            },
        }
    }

    /// Create an italic span.
    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marks: SpanMarks {
                italic: true,
                ..Default::default()
            },
        }
    }

    /// Check if this span is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Marks applied to a span. Serialized as the CMS's list of mark names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SpanMarks {
    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italic: bool,

    /// Underlined text
    pub underline: bool,

    /// Strikethrough text
    pub strikethrough: bool,

    /// Inline code
    pub code: bool,
}

impl SpanMarks {
    /// Check if any mark is applied.
    pub fn any(&self) -> bool {
        self.bold || self.italic || self.underline || self.strikethrough || self.code
    }
}

impl From<Vec<String>> for SpanMarks {
    fn from(names: Vec<String>) -> Self {
        let mut marks = SpanMarks::default();
        for name in &names {
            match name.as_str() {
                "strong" | "bold" => marks.bold = true,
                "em" | "italic" => marks.italic = true,
                "underline" => marks.underline = true,
                "strike-through" | "strikethrough" => marks.strikethrough = true,
                "code" => marks.code = true,
                other => log::debug!("Ignoring unrecognized span mark: {}", other),
            }
        }
        marks
    }
}

impl From<SpanMarks> for Vec<String> {
    fn from(marks: SpanMarks) -> Self {
        let mut names = Vec::new();
        if marks.bold {
            names.push("strong".to_string());
        }
        if marks.italic {
            names.push("em".to_string());
        }
        if marks.underline {
            names.push("underline".to_string());
        }
        if marks.strikethrough {
            names.push("strike-through".to_string());
        }
        if marks.code {
            names.push("code".to_string());
        }
        names
    }
}

/// Structural style of a rich-text block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockStyle {
    /// Normal paragraph (default)
    #[default]
    Paragraph,
    /// Heading level 1
    H1,
    /// Heading level 2
    H2,
    /// Heading level 3
    H3,
    /// Heading level 4
    H4,
    /// Block quotation
    Blockquote,
}

impl BlockStyle {
    /// Get the heading level (1-4) or None.
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            BlockStyle::H1 => Some(1),
            BlockStyle::H2 => Some(2),
            BlockStyle::H3 => Some(3),
            BlockStyle::H4 => Some(4),
            _ => None,
        }
    }
}
