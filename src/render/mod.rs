//! Rendering module: content blocks to render nodes and plain-text excerpts.

mod excerpt;
mod node;
mod options;
mod renderer;
mod video;

pub use excerpt::{extract_plain_text, flatten};
pub use node::RenderNode;
pub use options::RenderOptions;
pub use renderer::{render, BlockRenderer};
pub use video::VideoIdExtractor;
