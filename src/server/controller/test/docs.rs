use super::*;

/// Tests serving both OpenAPI documents.
///
/// Expected: 200 with the document title for each name
#[tokio::test]
async fn serves_named_documents() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    for (name, title) in [
        ("OpenAPISpecAuthors", "Library API (Authors)"),
        ("OpenAPISpecBooks", "Library API (Books)"),
    ] {
        let uri = format!("/swagger/{}/swagger.json", name);
        let response = send(db, Method::GET, &uri, None, None).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["info"]["title"], title);
    }

    Ok(())
}

/// Tests that the books document carries the vendor media types.
///
/// Expected: both vendor response types documented
#[tokio::test]
async fn books_document_contains_vendor_media_types() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let response = send(
        db,
        Method::GET,
        "/swagger/OpenAPISpecBooks/swagger.json",
        None,
        None,
    )
    .await;

    let body = body_text(response).await;
    assert!(body.contains("application/vnd.marvin.bookwithconcatenatedauthorname+json"));
    assert!(body.contains("application/vnd.marvin.bookforcreationwithamountofpages+json"));

    Ok(())
}

/// Tests requesting an unknown document.
///
/// Expected: 404
#[tokio::test]
async fn unknown_document_returns_not_found() -> Result<(), DbErr> {
    let test = setup().await;
    let db = test.db.as_ref().unwrap();

    let response = send(
        db,
        Method::GET,
        "/swagger/OpenAPISpecPublishers/swagger.json",
        None,
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}
