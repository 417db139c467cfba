use async_trait::async_trait;

use crate::domain::{NewNote, Note};

#[async_trait]
pub trait NoteRepository: Send + Sync {
    async fn insert(&self, note: NewNote) -> Result<Note, RepositoryError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<Note>, RepositoryError>;

    async fn list(&self) -> Result<Vec<Note>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("query failed: {0}")]
    QueryFailed(String),
}
