use std::str::FromStr;

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::domain::{LanguageCode, SourceKind};
use crate::infrastructure::markdown::{ContentError, FilePayload};
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

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

fn field_error(field: &str, message: impl Into<String>) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ValidationErrorResponse {
            errors: vec![ValidationErrorDetail {
                field: field.to_string(),
                message: message.into(),
            }],
        }),
    )
        .into_response()
}

fn content_error_status(error: &ContentError) -> StatusCode {
    match error {
        ContentError::FileTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        _ => StatusCode::BAD_REQUEST,
    }
}

#[tracing::instrument(skip(state, multipart))]
pub async fn check_grammar_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Response {
    let mut md_file: Option<FilePayload> = None;
    let mut md_text: Option<String> = None;
    let mut lang = LanguageCode::default();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read multipart body");
                return error_response(
                    StatusCode::BAD_REQUEST,
                    format!("Failed to read multipart body: {}", e),
                );
            }
        };

        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "md_file" => {
                let filename = field.file_name().unwrap_or("upload.md").to_string();
                match field.bytes().await {
                    Ok(data) => md_file = Some(FilePayload { filename, data }),
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to read md_file field");
                        return error_response(
                            StatusCode::BAD_REQUEST,
                            format!("Failed to read file: {}", e),
                        );
                    }
                }
            }
            "md_text" => match field.text().await {
                Ok(text) => md_text = Some(text),
                Err(e) => return field_error("md_text", format!("unreadable field: {}", e)),
            },
            "lang" => match field.text().await {
                Ok(raw) => match LanguageCode::from_str(raw.trim()) {
                    Ok(code) => lang = code,
                    Err(message) => return field_error("lang", message),
                },
                Err(e) => return field_error("lang", format!("unreadable field: {}", e)),
            },
            _ => {}
        }
    }

    let source = if md_file.is_some() {
        SourceKind::File
    } else {
        SourceKind::Text
    };

    let content = match state.content_processor.process(md_file, md_text) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected grammar check input");
            return error_response(content_error_status(&e), e.to_string());
        }
    };

    match state.grammar_service.check(&content, source, lang).await {
        Ok(result) => {
            tracing::info!(
                issues = result.total_issues,
                source = %source,
                "Grammar check served"
            );
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Grammar check failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("An unexpected error occurred: {}", e),
            )
        }
    }
}
