use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Extension,
};
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        book::{BookDto, BookForCreationDto},
    },
    server::{
        data::{author::AuthorRepository, book::BookRepository},
        error::{validation::ValidationErrors, AppError},
        middleware::negotiation::{AcceptGate, MediaType},
        model::book::CreateBookParams,
        state::AppState,
        util::{
            path::ApiPath,
            representation::{Negotiated, NegotiatedBody},
        },
        validation::Validate,
    },
};

/// Tag for grouping book endpoints in OpenAPI documentation
pub static BOOK_TAG: &str = "books";

/// Media types produced by `get_book`, most specific first.
pub const GET_BOOK_MEDIA_TYPES: AcceptGate = AcceptGate::new(&[
    MediaType::BookWithConcatenatedAuthorName,
    MediaType::Book,
    MediaType::Json,
    MediaType::Xml,
]);

/// Media types produced by `create_book`, most specific first.
pub const CREATE_BOOK_MEDIA_TYPES: AcceptGate = AcceptGate::new(&[
    MediaType::BookForCreationWithAmountOfPages,
    MediaType::Json,
    MediaType::Xml,
]);

async fn require_author(state: &AppState, author_id: Uuid) -> Result<(), AppError> {
    let repo = AuthorRepository::new(&state.db);

    if repo.author_exists(author_id).await? {
        Ok(())
    } else {
        Err(AppError::NotFound(format!("Author {} not found", author_id)))
    }
}

/// Get the books of an author.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `media_type` - Response media type selected from the `Accept` header
/// - `author_id` - ID of the author whose books to list
///
/// # Returns
/// - `200 OK` - The author's books ordered by title
/// - `404 Not Found` - No author with the given ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/authors/{authorId}/books",
    tag = BOOK_TAG,
    params(
        ("authorId" = Uuid, Path, description = "The id of the book author")
    ),
    responses(
        (status = 200, description = "Successfully retrieved books", body = Vec<BookDto>),
        (status = 404, description = "Author not found")
    ),
)]
pub async fn get_books(
    State(state): State<AppState>,
    Extension(media_type): Extension<MediaType>,
    ApiPath(author_id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    require_author(&state, author_id).await?;

    let repo = BookRepository::new(&state.db);
    let books = repo.get_books(author_id).await?;

    Ok(Negotiated::collection(
        media_type,
        books.into_iter().map(|b| b.into_dto()).collect(),
    ))
}

/// Get a book by ID for a specific author.
///
/// The representation depends on the negotiated media type: the concatenated
/// author name vendor type returns `BookWithConcatenatedAuthorName`, every
/// other accepted type returns `Book`.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `media_type` - Response media type selected from the `Accept` header
/// - `author_id` - ID of the book author
/// - `book_id` - ID of the book
///
/// # Returns
/// - `200 OK` - The requested book
/// - `404 Not Found` - Author or book not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/authors/{authorId}/books/{bookId}",
    tag = BOOK_TAG,
    params(
        ("authorId" = Uuid, Path, description = "The id of the book author"),
        ("bookId" = Uuid, Path, description = "The id of the book")
    ),
    responses(
        (status = 200, description = "Successfully retrieved book", body = BookDto),
        (status = 404, description = "Author or book not found")
    ),
)]
pub async fn get_book(
    State(state): State<AppState>,
    Extension(media_type): Extension<MediaType>,
    ApiPath((author_id, book_id)): ApiPath<(Uuid, Uuid)>,
) -> Result<Response, AppError> {
    require_author(&state, author_id).await?;

    let repo = BookRepository::new(&state.db);
    let not_found = || {
        AppError::NotFound(format!(
            "Book {} of author {} not found",
            book_id, author_id
        ))
    };

    if media_type == MediaType::BookWithConcatenatedAuthorName {
        let book = repo
            .get_book_with_author(author_id, book_id)
            .await?
            .ok_or_else(not_found)?;

        return Ok(Negotiated::ok(media_type, book.into_dto()).into_response());
    }

    let book = repo
        .get_book(author_id, book_id)
        .await?
        .ok_or_else(not_found)?;

    Ok(Negotiated::ok(media_type, book.into_dto()).into_response())
}

/// Create a book for a specific author.
///
/// # Arguments
/// - `state` - Application state containing the database connection and base URL
/// - `media_type` - Response media type selected from the `Accept` header
/// - `author_id` - ID of the book author
/// - `payload` - Book to create, as JSON or XML
///
/// # Returns
/// - `201 Created` - The created book, with its URL in `Location`
/// - `404 Not Found` - No author with the given ID
/// - `415 Unsupported Media Type` - Body is neither JSON nor XML
/// - `422 Unprocessable Entity` - Payload failed validation
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/authors/{authorId}/books",
    tag = BOOK_TAG,
    params(
        ("authorId" = Uuid, Path, description = "The id of the book author")
    ),
    request_body = BookForCreationDto,
    responses(
        (status = 201, description = "Successfully created book", body = BookDto),
        (status = 404, description = "Author not found"),
        (status = 415, description = "Unsupported request content type", body = ErrorDto),
        (status = 422, description = "Payload failed validation", body = ValidationErrors)
    ),
)]
pub async fn create_book(
    State(state): State<AppState>,
    Extension(media_type): Extension<MediaType>,
    ApiPath(author_id): ApiPath<Uuid>,
    NegotiatedBody(payload): NegotiatedBody<BookForCreationDto>,
) -> Result<Response, AppError> {
    require_author(&state, author_id).await?;

    payload.validate()?;

    let params = CreateBookParams::from_dto(author_id, payload);
    let page_count = params.page_count;

    let mut repo = BookRepository::new(&state.db);
    let book = repo.add_book(params);
    repo.save_changes().await?;

    tracing::info!("Created book {} for author {}", book.id, author_id);

    let location = format!(
        "{}/api/authors/{}/books/{}",
        state.app_url.trim_end_matches('/'),
        author_id,
        book.id
    );

    if media_type == MediaType::BookForCreationWithAmountOfPages {
        let dto = book.into_creation_dto(page_count);
        return Ok(Negotiated::created(media_type, dto, location).into_response());
    }

    Ok(Negotiated::created(media_type, book.into_dto(), location).into_response())
}
