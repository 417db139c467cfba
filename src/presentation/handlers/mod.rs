mod check_grammar;
mod health;
mod notes;

pub use check_grammar::check_grammar_handler;
pub use health::health_handler;
pub use notes::{list_notes_handler, render_note_handler, save_note_handler};
