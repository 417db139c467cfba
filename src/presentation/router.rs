use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    check_grammar_handler, health_handler, list_notes_handler, render_note_handler,
    save_note_handler,
};
use crate::presentation::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // The framework limit sits above the validator's own cap so oversized
    // uploads get the validator's 413 body instead of a bare rejection.
    let body_limit = DefaultBodyLimit::max(state.max_upload_bytes * 2);

    Router::new()
        .route("/health", get(health_handler))
        .route("/notes/check-grammar", post(check_grammar_handler))
        .route("/notes/save", post(save_note_handler))
        .route("/notes/list", get(list_notes_handler))
        .route("/notes/{note_id}/render", get(render_note_handler))
        .layer(body_limit)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
