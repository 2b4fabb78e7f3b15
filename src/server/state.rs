//! Application state shared across all request handlers.
//!
//! `AppState` is built once in `main` from explicitly constructed parts and
//! cloned into each handler through Axum's state extraction. Repositories are
//! not stored here; handlers construct them per request from `db`, so staged
//! changes never outlive the request that made them.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::openapi::ApiDocuments;

/// Application state containing shared resources.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<ApiDocuments>` is a reference-counted pointer
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Application base URL used to build `Location` headers.
    pub app_url: String,

    /// OpenAPI documents generated at startup.
    pub docs: Arc<ApiDocuments>,
}

impl AppState {
    /// Creates a new application state and generates the API documents.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `app_url` - Application base URL, may be empty
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, app_url: String) -> Self {
        Self {
            db,
            app_url,
            docs: Arc::new(ApiDocuments::generate()),
        }
    }
}
