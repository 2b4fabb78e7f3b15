//! Library API Test Utils
//!
//! Provides shared testing utilities for the library API. This crate offers a builder
//! for creating test contexts backed by in-memory SQLite databases, plus fixtures and
//! factories for authors and books.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **fixture**: In-memory entity models, nothing is inserted
//! - **factory**: Builders that insert entities with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_books() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_library_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let author = factory::create_author(db).await?;
//!     let book = factory::create_book(db, author.id).await?;
//!     // Perform repository operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
