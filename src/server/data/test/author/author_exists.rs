use super::*;

/// Tests detecting an existing author.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_for_existing_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_author(db).await?;

    let repo = AuthorRepository::new(db);
    let result = repo.author_exists(author.id).await;

    assert!(result.is_ok());
    assert!(result.unwrap());

    Ok(())
}

/// Tests detecting a missing author.
///
/// Verifies that an unknown ID is reported as missing even when other
/// authors exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_author(db).await?;

    let repo = AuthorRepository::new(db);
    let result = repo.author_exists(Uuid::new_v4()).await;

    assert!(result.is_ok());
    assert!(!result.unwrap());

    Ok(())
}

/// Tests error handling when the author table is missing.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuthorRepository::new(db);
    let result = repo.author_exists(Uuid::new_v4()).await;

    assert!(result.is_err());

    Ok(())
}
