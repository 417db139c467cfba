use notedown::application::ports::NoteRepository;
use notedown::domain::NewNote;

use crate::helpers::test_postgres::TestPostgres;

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn given_postgres_when_inserting_and_listing_then_notes_round_trip() {
    let pg = TestPostgres::new().await;

    let saved = pg
        .note_repository
        .insert(NewNote {
            title: "integration".to_string(),
            content: "# Stored in postgres".to_string(),
        })
        .await
        .unwrap();

    assert!(saved.id > 0);

    let fetched = pg.note_repository.get_by_id(saved.id).await.unwrap();
    assert_eq!(fetched.as_ref().map(|n| n.title.as_str()), Some("integration"));

    let all = pg.note_repository.list().await.unwrap();
    assert_eq!(all.len(), 1);
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn given_postgres_when_fetching_unknown_id_then_none() {
    let pg = TestPostgres::new().await;

    let missing = pg.note_repository.get_by_id(9999).await.unwrap();
    assert!(missing.is_none());
}
