mod content_processor;
mod pulldown_renderer;

pub use content_processor::{
    ContentError, FilePayload, InvalidPattern, MarkdownContentProcessor,
};
pub use pulldown_renderer::PulldownRenderer;
