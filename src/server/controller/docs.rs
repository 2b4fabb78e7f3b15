use axum::{extract::State, Json};
use utoipa::openapi::OpenApi;

use crate::server::{error::AppError, state::AppState, util::path::ApiPath};

/// Serve a generated OpenAPI document by name.
///
/// # Returns
/// - `200 OK` - The OpenAPI document as JSON
/// - `404 Not Found` - No document with the given name
pub async fn get_openapi_document(
    State(state): State<AppState>,
    ApiPath(document): ApiPath<String>,
) -> Result<Json<OpenApi>, AppError> {
    let Some(openapi) = state.docs.get(&document) else {
        return Err(AppError::NotFound(format!(
            "OpenAPI document '{}' not found",
            document
        )));
    };

    Ok(Json(openapi.clone()))
}
