//! HTTP API backend for the library.
//!
//! The backend uses Axum as the web framework and SeaORM for database
//! operations. Authors and their books are exposed as REST resources that can
//! be read and written as JSON, XML or book-specific vendor media types.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Data Layer** (`data/`) - Repositories with staged writes and entity-to-domain conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Validation** (`validation`) - Declarative constraint tables for request payloads
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - `Accept` header content negotiation
//! - **Utilities** (`util/`) - Negotiated request/response bodies and path extraction
//! - **OpenAPI** (`openapi/`) - Generated API documents and their filters
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB pool, base URL, API documents)
//! - **Startup** (`startup`) - Tracing, database connection and migrations, CORS
//! - **Router** (`router`) - Axum route configuration with per-route media types
//!
//! # Request Flow
//!
//! 1. **Router** matches the request and its method
//! 2. **Middleware** selects the response media type from `Accept`, or answers 406
//! 3. **Controller** extracts path and body, checks the parent author, validates
//! 4. **Data** queries or stages writes and converts entities to domain models
//! 5. **Controller** converts the domain model to the DTO for the media type

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod openapi;
pub mod router;
pub mod startup;
pub mod state;
pub mod util;
pub mod validation;
