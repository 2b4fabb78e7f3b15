use super::*;

/// Tests that authors are ordered by first name, then last name.
///
/// Expected: Ok(authors) in name order regardless of insertion order
#[tokio::test]
async fn returns_authors_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for (first_name, last_name) in [
        ("Stephen", "King"),
        ("Douglas", "Adams"),
        ("Stephen", "Fry"),
    ] {
        factory::author::AuthorFactory::new(db)
            .first_name(first_name)
            .last_name(last_name)
            .build()
            .await?;
    }

    let repo = AuthorRepository::new(db);
    let authors = repo.get_authors().await?;

    let names: Vec<String> = authors.iter().map(|a| a.full_name()).collect();
    assert_eq!(names, vec!["Douglas Adams", "Stephen Fry", "Stephen King"]);

    Ok(())
}

/// Tests listing with no authors.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_when_no_authors() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuthorRepository::new(db);
    let authors = repo.get_authors().await?;

    assert!(authors.is_empty());

    Ok(())
}
