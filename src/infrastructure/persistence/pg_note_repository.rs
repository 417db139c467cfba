use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use crate::application::ports::{NoteRepository, RepositoryError};
use crate::domain::{NewNote, Note};

pub struct PgNoteRepository {
    pool: PgPool,
}

impl PgNoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct NoteRow {
    id: i64,
    title: String,
    content: String,
    created_at: DateTime<Utc>,
}

impl From<NoteRow> for Note {
    fn from(row: NoteRow) -> Self {
        Note {
            id: row.id,
            title: row.title,
            content: row.content,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl NoteRepository for PgNoteRepository {
    #[instrument(skip(self, note), fields(title = %note.title))]
    async fn insert(&self, note: NewNote) -> Result<Note, RepositoryError> {
        let row: NoteRow = sqlx::query_as(
            r#"
            INSERT INTO notes (title, content, created_at)
            VALUES ($1, $2, $3)
            RETURNING id, title, content, created_at
            "#,
        )
        .bind(&note.title)
        .bind(&note.content)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(row.into())
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i64) -> Result<Option<Note>, RepositoryError> {
        let row: Option<NoteRow> = sqlx::query_as(
            r#"
            SELECT id, title, content, created_at
            FROM notes
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(row.map(Note::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Note>, RepositoryError> {
        let rows: Vec<NoteRow> = sqlx::query_as(
            r#"
            SELECT id, title, content, created_at
            FROM notes
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(rows.into_iter().map(Note::from).collect())
    }
}
