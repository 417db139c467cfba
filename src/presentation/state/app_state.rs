use std::sync::Arc;

use crate::application::services::{GrammarCheckService, NoteService};
use crate::infrastructure::markdown::MarkdownContentProcessor;

#[derive(Clone)]
pub struct AppState {
    pub grammar_service: Arc<GrammarCheckService>,
    pub note_service: Arc<NoteService>,
    pub content_processor: Arc<MarkdownContentProcessor>,
    pub max_upload_bytes: usize,
}
