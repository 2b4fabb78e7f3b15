//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in
//! tests. Each entity has a `*Factory` builder for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let author = factory::create_author(&db).await?;
//! let book = factory::create_book(&db, author.id).await?;
//!
//! // Author with several books in one call
//! let (author, books) = factory::helpers::create_author_with_books(&db, 3).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let author = factory::author::AuthorFactory::new(&db)
//!     .first_name("Stephen")
//!     .last_name("Fry")
//!     .build()
//!     .await?;
//! ```

pub mod author;
pub mod book;
pub mod helpers;

pub use author::create_author;
pub use book::create_book;
