use std::sync::Arc;

use crate::application::ports::{MarkdownRenderer, NoteRepository, RepositoryError};
use crate::domain::{NewNote, Note};

/// Persistence glue for note records plus HTML rendering of stored notes.
pub struct NoteService {
    repository: Arc<dyn NoteRepository>,
    renderer: Arc<dyn MarkdownRenderer>,
}

impl NoteService {
    pub fn new(repository: Arc<dyn NoteRepository>, renderer: Arc<dyn MarkdownRenderer>) -> Self {
        Self {
            repository,
            renderer,
        }
    }

    #[tracing::instrument(skip(self, note), fields(title = %note.title))]
    pub async fn save(&self, note: NewNote) -> Result<Note, RepositoryError> {
        let saved = self.repository.insert(note).await?;
        tracing::info!(note_id = saved.id, "Note saved");
        Ok(saved)
    }

    pub async fn list(&self) -> Result<Vec<Note>, RepositoryError> {
        self.repository.list().await
    }

    /// Returns the rendered HTML for a stored note, or `None` when the id
    /// is unknown.
    pub async fn render(&self, id: i64) -> Result<Option<String>, RepositoryError> {
        let note = self.repository.get_by_id(id).await?;
        Ok(note.map(|n| self.renderer.render(&n.content)))
    }
}
