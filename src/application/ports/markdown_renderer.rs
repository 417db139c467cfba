/// Renders markdown to HTML. Pure CPU work, so the seam stays synchronous.
pub trait MarkdownRenderer: Send + Sync {
    fn render(&self, content: &str) -> String;
}
