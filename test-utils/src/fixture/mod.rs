//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for unit tests (mapping, DTO
//! conversion) and provide the default values used by the factories. Unlike
//! factories, fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let author = fixture::author::entity();
//! let book = fixture::book::entity_builder()
//!     .author_id(author.id)
//!     .title("The Winds of Winter")
//!     .build();
//! ```

pub mod author;
pub mod book;

pub use author::{entity as author_entity, entity_builder as author_entity_builder};
pub use book::{entity as book_entity, entity_builder as book_entity_builder};
