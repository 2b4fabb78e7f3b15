use super::*;

/// Tests retrieving an author by ID.
///
/// Expected: Ok(Some(author))
#[tokio::test]
async fn returns_existing_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::author::AuthorFactory::new(db)
        .first_name("Stephen")
        .last_name("Fry")
        .build()
        .await?;

    let repo = AuthorRepository::new(db);
    let author = repo.get_author(created.id).await?.unwrap();

    assert_eq!(author.id, created.id);
    assert_eq!(author.first_name, "Stephen");
    assert_eq!(author.last_name, "Fry");

    Ok(())
}

/// Tests retrieving an unknown author.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuthorRepository::new(db);
    let author = repo.get_author(Uuid::new_v4()).await?;

    assert!(author.is_none());

    Ok(())
}
