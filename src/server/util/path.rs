use axum::extract::{FromRequestParts, Path};

use crate::server::error::AppError;

/// `Path` extractor whose rejection is an `AppError`.
///
/// A malformed identifier (e.g. a non-UUID `authorId`) becomes a 400 with
/// the standard error body instead of axum's plain-text rejection.
#[derive(FromRequestParts, Debug)]
#[from_request(via(Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
