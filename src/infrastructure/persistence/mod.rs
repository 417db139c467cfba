mod memory_note_repository;
mod pg_note_repository;
mod pg_pool;

pub use memory_note_repository::MemoryNoteRepository;
pub use pg_note_repository::PgNoteRepository;
pub use pg_pool::create_pool;
