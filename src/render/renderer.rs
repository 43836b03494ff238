//! Block rendering for content documents.

use crate::model::{BlockStyle, ContentBlock, ContentDocument, RichText, RichTextNode, Span};

use super::{RenderNode, RenderOptions, VideoIdExtractor};

/// Render a content document to a sequence of render nodes.
///
/// Pure and total: rendering never fails. Malformed video URLs become visible
/// placeholder nodes and unrecognized block kinds are skipped, so the output
/// is never longer than the input and preserves its order.
pub fn render(doc: &ContentDocument, options: &RenderOptions) -> Vec<RenderNode> {
    let renderer = BlockRenderer::new(options.clone());
    renderer.render(doc)
}

/// Content block renderer.
pub struct BlockRenderer {
    options: RenderOptions,
    video_ids: VideoIdExtractor,
}

impl BlockRenderer {
    /// Create a new renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            video_ids: VideoIdExtractor::new(),
        }
    }

    /// Render a document to nodes, one per renderable block, in input order.
    pub fn render(&self, doc: &ContentDocument) -> Vec<RenderNode> {
        doc.iter().filter_map(|b| self.render_block(b)).collect()
    }

    /// Render a single block. Returns None only for skipped blocks.
    pub fn render_block(&self, block: &ContentBlock) -> Option<RenderNode> {
        match block {
            ContentBlock::Text { key, rich_text } => {
                if self.options.skip_empty && rich_text.is_empty() {
                    return None;
                }
                let (style, html) = self.render_rich_text(rich_text);
                Some(RenderNode::Paragraph {
                    key: key.clone(),
                    style,
                    html,
                })
            }

            ContentBlock::Image {
                key,
                image_ref,
                alt_text,
                caption,
            } => {
                let alt = if alt_text.trim().is_empty() {
                    self.options.fallback_alt.clone().unwrap_or_default()
                } else {
                    alt_text.clone()
                };
                Some(RenderNode::Image {
                    key: key.clone(),
                    src: image_ref.clone(),
                    alt,
                    caption: caption.clone(),
                })
            }

            ContentBlock::VideoEmbed {
                key,
                source_url,
                title,
                caption,
            } => match self.video_ids.extract(source_url) {
                Some(video_id) => {
                    let embed_url = VideoIdExtractor::embed_url(&video_id);
                    Some(RenderNode::VideoEmbed {
                        key: key.clone(),
                        video_id,
                        embed_url,
                        title: title.clone(),
                        caption: caption.clone(),
                    })
                }
                // Never drop the block silently: surface the bad URL.
                None => Some(RenderNode::VideoEmbedError {
                    key: key.clone(),
                    source_url: source_url.clone(),
                }),
            },

            ContentBlock::Highlight {
                key,
                rich_text,
                background_style,
                border_style,
                padding,
            } => {
                let (_, html) = self.render_rich_text(rich_text);
                Some(RenderNode::Callout {
                    key: key.clone(),
                    html,
                    background_style: background_style.clone(),
                    border_style: border_style.clone(),
                    padding: padding.clone(),
                })
            }

            // Deliberate: kinds this library does not know about render to
            // nothing rather than to an error.
            ContentBlock::Unknown => {
                log::debug!("Skipping content block of unrecognized kind");
                None
            }
        }
    }

    /// Flatten rich text to escaped inline HTML with marks applied.
    ///
    /// The node's style is taken from the first structural block in the
    /// payload; bare spans and legacy strings render as plain paragraphs.
    fn render_rich_text(&self, rich: &RichText) -> (BlockStyle, String) {
        match rich {
            RichText::Plain(s) => (
                BlockStyle::Paragraph,
                html_escape::encode_text(s).into_owned(),
            ),
            RichText::Nodes(nodes) => {
                let mut style = BlockStyle::Paragraph;
                let mut style_seen = false;
                let mut html = String::new();
                for node in nodes {
                    match node {
                        RichTextNode::Span(span) => html.push_str(&render_span(span)),
                        RichTextNode::Block {
                            style: block_style,
                            children,
                        } => {
                            if !style_seen {
                                style = self.clamp_style(*block_style);
                                style_seen = true;
                            }
                            for span in children {
                                html.push_str(&render_span(span));
                            }
                        }
                    }
                }
                (style, html)
            }
        }
    }

    fn clamp_style(&self, style: BlockStyle) -> BlockStyle {
        match style.heading_level() {
            Some(level) if level > self.options.max_heading_level => {
                match self.options.max_heading_level {
                    1 => BlockStyle::H1,
                    2 => BlockStyle::H2,
                    3 => BlockStyle::H3,
                    _ => BlockStyle::H4,
                }
            }
            _ => style,
        }
    }
}

/// Render one span: escape the text, then wrap it in a tag for every mark
/// that is present, code innermost and strong outermost.
fn render_span(span: &Span) -> String {
    let mut out = html_escape::encode_text(&span.text).into_owned();
    if span.marks.code {
        out = format!("<code>{}</code>", out);
    }
    if span.marks.strikethrough {
        out = format!("<s>{}</s>", out);
    }
    if span.marks.underline {
        out = format!("<u>{}</u>", out);
    }
    if span.marks.italic {
        out = format!("<em>{}</em>", out);
    }
    if span.marks.bold {
        out = format!("<strong>{}</strong>", out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SpanMarks;

    fn text_block(key: &str, nodes: Vec<RichTextNode>) -> ContentBlock {
        ContentBlock::Text {
            key: key.into(),
            rich_text: RichText::Nodes(nodes),
        }
    }

    #[test]
    fn test_span_marks_nesting() {
        let span = Span {
            text: "both".into(),
            marks: SpanMarks {
                bold: true,
                italic: true,
                ..Default::default()
            },
        };
        assert_eq!(render_span(&span), "<strong><em>both</em></strong>");
    }

    #[test]
    fn test_span_text_is_escaped() {
        let span = Span::new("a < b & c");
        let html = render_span(&span);
        assert!(html.contains("&lt;"));
        assert!(html.contains("&amp;"));
        assert!(!html.contains("a < b"));
    }

    #[test]
    fn test_paragraph_takes_first_block_style() {
        let block = text_block(
            "t1",
            vec![RichTextNode::Block {
                style: BlockStyle::H2,
                children: vec![Span::new("Heading")],
            }],
        );
        let renderer = BlockRenderer::new(RenderOptions::default());
        let node = renderer.render_block(&block).unwrap();
        let RenderNode::Paragraph { style, html, .. } = node else {
            panic!("expected paragraph");
        };
        assert_eq!(style, BlockStyle::H2);
        assert_eq!(html, "Heading");
    }

    #[test]
    fn test_heading_clamped_to_max() {
        let block = text_block(
            "t1",
            vec![RichTextNode::Block {
                style: BlockStyle::H4,
                children: vec![Span::new("Deep")],
            }],
        );
        let renderer = BlockRenderer::new(RenderOptions::new().with_max_heading(2));
        let node = renderer.render_block(&block).unwrap();
        let RenderNode::Paragraph { style, .. } = node else {
            panic!("expected paragraph");
        };
        assert_eq!(style, BlockStyle::H2);
    }

    #[test]
    fn test_image_alt_fallback() {
        let block = ContentBlock::Image {
            key: "i1".into(),
            image_ref: "https://cdn.example/a.jpg".into(),
            alt_text: "  ".into(),
            caption: None,
        };
        let renderer =
            BlockRenderer::new(RenderOptions::new().with_fallback_alt("Flood in the hills"));
        let node = renderer.render_block(&block).unwrap();
        let RenderNode::Image { alt, .. } = node else {
            panic!("expected image");
        };
        assert_eq!(alt, "Flood in the hills");
    }

    #[test]
    fn test_unknown_block_is_skipped() {
        let renderer = BlockRenderer::new(RenderOptions::default());
        assert!(renderer.render_block(&ContentBlock::Unknown).is_none());
    }

    #[test]
    fn test_callout_carries_styles_verbatim() {
        let block = ContentBlock::Highlight {
            key: "h1".into(),
            rich_text: RichText::Plain("Note".into()),
            background_style: "#fef3c7".into(),
            border_style: "1px solid #f59e0b".into(),
            padding: "12px".into(),
        };
        let renderer = BlockRenderer::new(RenderOptions::default());
        let node = renderer.render_block(&block).unwrap();
        let RenderNode::Callout {
            background_style,
            border_style,
            padding,
            ..
        } = node
        else {
            panic!("expected callout");
        };
        assert_eq!(background_style, "#fef3c7");
        assert_eq!(border_style, "1px solid #f59e0b");
        assert_eq!(padding, "12px");
    }
}
