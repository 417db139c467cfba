mod cache_key;
mod grammar_check_service;
mod note_service;

pub use cache_key::generate_cache_key;
pub use grammar_check_service::GrammarCheckService;
pub use note_service::NoteService;
