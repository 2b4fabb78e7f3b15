use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Extension,
};
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        author::{AuthorDto, AuthorForUpdateDto},
    },
    server::{
        data::author::AuthorRepository,
        error::{validation::ValidationErrors, AppError},
        middleware::negotiation::MediaType,
        model::author::UpdateAuthorParams,
        state::AppState,
        util::{
            path::ApiPath,
            representation::{Negotiated, NegotiatedBody},
        },
        validation::Validate,
    },
};

/// Tag for grouping author endpoints in OpenAPI documentation
pub static AUTHOR_TAG: &str = "authors";

/// Get all authors.
///
/// # Returns
/// - `200 OK` - Authors ordered by first name, then last name
#[utoipa::path(
    get,
    path = "/api/authors",
    tag = AUTHOR_TAG,
    responses(
        (status = 200, description = "Successfully retrieved authors", body = Vec<AuthorDto>)
    ),
)]
pub async fn get_authors(
    State(state): State<AppState>,
    Extension(media_type): Extension<MediaType>,
) -> Result<impl IntoResponse, AppError> {
    let repo = AuthorRepository::new(&state.db);

    let authors = repo.get_authors().await?;

    Ok(Negotiated::collection(
        media_type,
        authors.into_iter().map(|a| a.into_dto()).collect(),
    ))
}

/// Get an author by ID.
///
/// # Returns
/// - `200 OK` - The requested author
/// - `404 Not Found` - No author with the given ID
#[utoipa::path(
    get,
    path = "/api/authors/{authorId}",
    tag = AUTHOR_TAG,
    params(
        ("authorId" = Uuid, Path, description = "The id of the author")
    ),
    responses(
        (status = 200, description = "Successfully retrieved author", body = AuthorDto),
        (status = 404, description = "Author not found")
    ),
)]
pub async fn get_author(
    State(state): State<AppState>,
    Extension(media_type): Extension<MediaType>,
    ApiPath(author_id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let repo = AuthorRepository::new(&state.db);

    let Some(author) = repo.get_author(author_id).await? else {
        return Err(AppError::NotFound(format!("Author {} not found", author_id)));
    };

    Ok(Negotiated::ok(media_type, author.into_dto()))
}

/// Replace the names of an author.
///
/// Both names are required and limited to 150 characters. Existence of the
/// author is checked before the payload is validated.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `media_type` - Response media type selected from the `Accept` header
/// - `author_id` - ID of the author to update
/// - `payload` - New first and last name, as JSON or XML
///
/// # Returns
/// - `200 OK` - The updated author
/// - `404 Not Found` - No author with the given ID
/// - `415 Unsupported Media Type` - Body is neither JSON nor XML
/// - `422 Unprocessable Entity` - Payload failed validation
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/authors/{authorId}",
    tag = AUTHOR_TAG,
    params(
        ("authorId" = Uuid, Path, description = "The id of the author")
    ),
    request_body = AuthorForUpdateDto,
    responses(
        (status = 200, description = "Successfully updated author", body = AuthorDto),
        (status = 404, description = "Author not found"),
        (status = 415, description = "Unsupported request content type", body = ErrorDto),
        (status = 422, description = "Payload failed validation", body = ValidationErrors)
    ),
)]
pub async fn update_author(
    State(state): State<AppState>,
    Extension(media_type): Extension<MediaType>,
    ApiPath(author_id): ApiPath<Uuid>,
    NegotiatedBody(payload): NegotiatedBody<AuthorForUpdateDto>,
) -> Result<Response, AppError> {
    let mut repo = AuthorRepository::new(&state.db);

    if !repo.author_exists(author_id).await? {
        return Err(AppError::NotFound(format!("Author {} not found", author_id)));
    }

    payload.validate()?;

    let author = repo.update_author(UpdateAuthorParams::from_dto(author_id, payload));
    repo.save_changes().await?;

    tracing::info!("Updated author {}", author_id);

    Ok(Negotiated::ok(media_type, author.into_dto()).into_response())
}
