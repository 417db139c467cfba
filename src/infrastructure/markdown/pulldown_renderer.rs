use pulldown_cmark::{Options, Parser, html};

use crate::application::ports::MarkdownRenderer;

/// CommonMark-to-HTML adapter over pulldown-cmark.
pub struct PulldownRenderer {
    options: Options,
}

impl PulldownRenderer {
    pub fn new() -> Self {
        Self {
            options: Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES,
        }
    }
}

impl Default for PulldownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer for PulldownRenderer {
    fn render(&self, content: &str) -> String {
        let parser = Parser::new_ext(content, self.options);
        let mut html_output = String::with_capacity(content.len() * 3 / 2);
        html::push_html(&mut html_output, parser);
        html_output
    }
}
