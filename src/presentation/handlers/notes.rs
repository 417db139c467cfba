use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{NewNote, Note};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize)]
pub struct ValidationErrorDetail {
    pub field: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ValidationErrorResponse {
    pub errors: Vec<ValidationErrorDetail>,
}

#[derive(Deserialize)]
pub struct NoteCreate {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Serialize)]
pub struct NoteSaveResponse {
    pub note_id: i64,
    pub message: String,
}

#[derive(Serialize)]
pub struct NotePublic {
    pub note_id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<Note> for NotePublic {
    fn from(note: Note) -> Self {
        Self {
            note_id: note.id,
            title: note.title,
            content: note.content,
            created_at: note.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct RenderResponse {
    pub html: String,
}

#[tracing::instrument(skip(state, payload))]
pub async fn save_note_handler(
    State(state): State<AppState>,
    Json(payload): Json<NoteCreate>,
) -> Response {
    let mut errors = Vec::new();
    if payload.title.trim().is_empty() {
        errors.push(ValidationErrorDetail {
            field: "title".to_string(),
            message: "title must not be empty".to_string(),
        });
    }
    if payload.content.trim().is_empty() {
        errors.push(ValidationErrorDetail {
            field: "content".to_string(),
            message: "content must not be empty".to_string(),
        });
    }
    if !errors.is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ValidationErrorResponse { errors }),
        )
            .into_response();
    }

    let note = NewNote {
        title: payload.title,
        content: payload.content,
    };

    match state.note_service.save(note).await {
        Ok(saved) => (
            StatusCode::CREATED,
            Json(NoteSaveResponse {
                note_id: saved.id,
                message: "Note saved successfully".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to save note");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to save note: {}", e),
                }),
            )
                .into_response()
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn list_notes_handler(State(state): State<AppState>) -> Response {
    match state.note_service.list().await {
        Ok(notes) => {
            let notes: Vec<NotePublic> = notes.into_iter().map(NotePublic::from).collect();
            (StatusCode::OK, Json(notes)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to list notes");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to list notes: {}", e),
                }),
            )
                .into_response()
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn render_note_handler(
    State(state): State<AppState>,
    Path(note_id): Path<i64>,
) -> Response {
    match state.note_service.render(note_id).await {
        Ok(Some(html)) => (StatusCode::OK, Json(RenderResponse { html })).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Note not found".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, note_id, "Failed to render note");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to render note: {}", e),
                }),
            )
                .into_response()
        }
    }
}
