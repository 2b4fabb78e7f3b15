use super::*;

/// Tests listing an author's books.
///
/// Verifies that only books of the requested author are returned and that
/// they are ordered by title.
///
/// Expected: Ok(books) sorted by title
#[tokio::test]
async fn returns_books_of_author_ordered_by_title() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_author(db).await?;
    let other = factory::create_author(db).await?;

    for title in ["A Storm of Swords", "A Clash of Kings", "A Game of Thrones"] {
        factory::book::BookFactory::new(db, author.id)
            .title(title)
            .build()
            .await?;
    }
    factory::create_book(db, other.id).await?;

    let repo = BookRepository::new(db);
    let books = repo.get_books(author.id).await?;

    let titles: Vec<&str> = books.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["A Clash of Kings", "A Game of Thrones", "A Storm of Swords"]
    );
    assert!(books.iter().all(|b| b.author_id == author.id));

    Ok(())
}

/// Tests listing books of an author without any.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_for_author_without_books() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_author(db).await?;

    let repo = BookRepository::new(db);
    let books = repo.get_books(author.id).await?;

    assert!(books.is_empty());

    Ok(())
}

/// Tests that deleting an author removes their books.
///
/// Expected: no books remain for the deleted author
#[tokio::test]
async fn books_removed_with_author() -> Result<(), DbErr> {
    use sea_orm::EntityTrait;

    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, _) = factory::helpers::create_author_with_books(db, 2).await?;

    entity::prelude::Author::delete_by_id(author.id)
        .exec(db)
        .await?;

    let repo = BookRepository::new(db);
    let books = repo.get_books(author.id).await?;

    assert!(books.is_empty());

    Ok(())
}
