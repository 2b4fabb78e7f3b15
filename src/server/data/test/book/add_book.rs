use super::*;

fn params(author_id: Uuid) -> CreateBookParams {
    CreateBookParams {
        author_id,
        title: "The Winds of Winter".to_string(),
        description: Some("Book six".to_string()),
        page_count: Some(900),
    }
}

/// Tests that a staged book is persisted on save.
///
/// Expected: Ok(()) and the book retrievable under its assigned ID
#[tokio::test]
async fn persists_book_on_save() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_author(db).await?;

    let mut repo = BookRepository::new(db);
    let staged = repo.add_book(params(author.id));
    repo.save_changes().await?;

    let stored = repo.get_book(author.id, staged.id).await?.unwrap();
    assert_eq!(stored, staged);
    assert_eq!(stored.title, "The Winds of Winter");

    Ok(())
}

/// Tests that a staged book is not visible before save.
///
/// Expected: Ok(None) before `save_changes`
#[tokio::test]
async fn does_not_persist_before_save() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_author(db).await?;

    let mut repo = BookRepository::new(db);
    let staged = repo.add_book(params(author.id));

    assert!(repo.get_book(author.id, staged.id).await?.is_none());
    assert!(repo.get_books(author.id).await?.is_empty());

    Ok(())
}

/// Tests that every staged book receives a distinct ID.
///
/// Expected: two books with different IDs after save
#[tokio::test]
async fn assigns_unique_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_author(db).await?;

    let mut repo = BookRepository::new(db);
    let first = repo.add_book(params(author.id));
    let second = repo.add_book(params(author.id));
    repo.save_changes().await?;

    assert_ne!(first.id, second.id);
    assert_eq!(repo.get_books(author.id).await?.len(), 2);

    Ok(())
}

/// Tests that a failing save persists nothing.
///
/// Verifies that when one staged book violates the author foreign key the
/// whole batch is rolled back.
///
/// Expected: Err(DbErr) and no books stored
#[tokio::test]
async fn rolls_back_batch_on_failure() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_author(db).await?;

    let mut repo = BookRepository::new(db);
    repo.add_book(params(author.id));
    repo.add_book(params(Uuid::new_v4()));
    let result = repo.save_changes().await;

    assert!(result.is_err());
    assert!(repo.get_books(author.id).await?.is_empty());

    Ok(())
}
