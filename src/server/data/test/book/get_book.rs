use super::*;

/// Tests retrieving a book through its author.
///
/// Expected: Ok(Some(book))
#[tokio::test]
async fn returns_book_of_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_author(db).await?;
    let created = factory::create_book(db, author.id).await?;

    let repo = BookRepository::new(db);
    let book = repo.get_book(author.id, created.id).await?.unwrap();

    assert_eq!(book.id, created.id);
    assert_eq!(book.author_id, author.id);
    assert_eq!(book.title, created.title);
    assert_eq!(book.description, created.description);

    Ok(())
}

/// Tests that a book is not reachable through a different author.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_other_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_author(db).await?;
    let other = factory::create_author(db).await?;
    let created = factory::create_book(db, author.id).await?;

    let repo = BookRepository::new(db);
    let book = repo.get_book(other.id, created.id).await?;

    assert!(book.is_none());

    Ok(())
}

/// Tests retrieving an unknown book.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_book() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_author(db).await?;

    let repo = BookRepository::new(db);
    let book = repo.get_book(author.id, Uuid::new_v4()).await?;

    assert!(book.is_none());

    Ok(())
}
