use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::application::ports::{NoteRepository, RepositoryError};
use crate::domain::{NewNote, Note};

/// Keeps notes in process memory. Backs tests and database-less local runs.
pub struct MemoryNoteRepository {
    notes: RwLock<Vec<Note>>,
    next_id: AtomicI64,
}

impl MemoryNoteRepository {
    pub fn new() -> Self {
        Self {
            notes: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryNoteRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NoteRepository for MemoryNoteRepository {
    async fn insert(&self, note: NewNote) -> Result<Note, RepositoryError> {
        let saved = Note {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            title: note.title,
            content: note.content,
            created_at: Utc::now(),
        };

        self.notes.write().await.push(saved.clone());
        Ok(saved)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Note>, RepositoryError> {
        let notes = self.notes.read().await;
        Ok(notes.iter().find(|n| n.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Note>, RepositoryError> {
        Ok(self.notes.read().await.clone())
    }
}
