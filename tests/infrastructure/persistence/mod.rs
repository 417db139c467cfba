mod pg_note_repository_test;
