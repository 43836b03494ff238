//! Rendering options and configuration.

/// Options for rendering a content document.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Alt text to use when an image block's alt text is empty,
    /// typically the parent entry's title
    pub fallback_alt: Option<String>,

    /// Maximum heading level (1-4); deeper headings are clamped
    pub max_heading_level: u8,

    /// Skip text blocks whose rich text is entirely empty
    pub skip_empty: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the alt-text fallback for images without alt text.
    pub fn with_fallback_alt(mut self, alt: impl Into<String>) -> Self {
        self.fallback_alt = Some(alt.into());
        self
    }

    /// Set the maximum heading level.
    pub fn with_max_heading(mut self, level: u8) -> Self {
        self.max_heading_level = level.clamp(1, 4);
        self
    }

    /// Enable or disable skipping of empty text blocks.
    pub fn with_skip_empty(mut self, skip: bool) -> Self {
        self.skip_empty = skip;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            fallback_alt: None,
            max_heading_level: 4,
            skip_empty: false,
        }
    }
}
