use super::*;

fn params(id: Uuid) -> UpdateAuthorParams {
    UpdateAuthorParams {
        id,
        first_name: "Terry".to_string(),
        last_name: "Pratchett".to_string(),
    }
}

/// Tests that a staged update is persisted on save.
///
/// Expected: Ok(()) and the stored names replaced
#[tokio::test]
async fn persists_update_on_save() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_author(db).await?;

    let mut repo = AuthorRepository::new(db);
    let staged = repo.update_author(params(created.id));
    repo.save_changes().await?;

    assert_eq!(staged.full_name(), "Terry Pratchett");

    let stored = repo.get_author(created.id).await?.unwrap();
    assert_eq!(stored.first_name, "Terry");
    assert_eq!(stored.last_name, "Pratchett");

    Ok(())
}

/// Tests that a staged update is not visible before save.
///
/// Expected: stored names unchanged until `save_changes`
#[tokio::test]
async fn does_not_persist_before_save() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_author(db).await?;

    let mut repo = AuthorRepository::new(db);
    repo.update_author(params(created.id));

    let stored = repo.get_author(created.id).await?.unwrap();
    assert_eq!(stored.first_name, created.first_name);
    assert_eq!(stored.last_name, created.last_name);

    Ok(())
}

/// Tests that saving with nothing staged is a no-op.
///
/// Expected: Ok(())
#[tokio::test]
async fn save_without_changes_succeeds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut repo = AuthorRepository::new(db);
    let result = repo.save_changes().await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests updating an author that does not exist.
///
/// Expected: Err(DbErr) on save
#[tokio::test]
async fn fails_for_unknown_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut repo = AuthorRepository::new(db);
    repo.update_author(params(Uuid::new_v4()));
    let result = repo.save_changes().await;

    assert!(result.is_err());

    Ok(())
}
