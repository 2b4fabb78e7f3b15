use super::*;

/// Tests retrieving a book together with its author.
///
/// Expected: Ok(Some(book with author))
#[tokio::test]
async fn returns_book_with_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::author::AuthorFactory::new(db)
        .first_name("George")
        .last_name("RR Martin")
        .build()
        .await?;
    let created = factory::create_book(db, author.id).await?;

    let repo = BookRepository::new(db);
    let result = repo
        .get_book_with_author(author.id, created.id)
        .await?
        .unwrap();

    assert_eq!(result.book.id, created.id);
    assert_eq!(result.author.id, author.id);
    assert_eq!(result.into_dto().author_name, "George RR Martin");

    Ok(())
}

/// Tests that the projection is scoped to the author.
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
    let result = repo.get_book_with_author(other.id, created.id).await?;

    assert!(result.is_none());

    Ok(())
}
