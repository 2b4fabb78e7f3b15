//! Book domain models, projections and creation parameters.

use uuid::Uuid;

use crate::{
    model::book::{
        BookDto, BookForCreationDto, BookForCreationWithAmountOfPagesDto,
        BookWithConcatenatedAuthorNameDto,
    },
    server::model::author::Author,
};

/// A book as seen by the server.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub description: Option<String>,
}

impl Book {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::book::Model) -> Self {
        Self {
            id: entity.id,
            author_id: entity.author_id,
            title: entity.title,
            description: entity.description,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> BookDto {
        BookDto {
            id: self.id,
            author_id: self.author_id,
            title: self.title,
            description: self.description,
        }
    }

    /// Converts a freshly created book to the representation that echoes the
    /// submitted page count.
    ///
    /// # Arguments
    /// - `amount_of_pages` - Page count from the creation payload
    pub fn into_creation_dto(self, amount_of_pages: Option<i32>) -> BookForCreationWithAmountOfPagesDto {
        BookForCreationWithAmountOfPagesDto {
            title: self.title,
            description: self.description,
            amount_of_pages,
        }
    }
}

/// A book together with its owning author.
///
/// Backs the concatenated-author-name representation.
#[derive(Debug, Clone)]
pub struct BookWithAuthor {
    pub book: Book,
    pub author: Author,
}

impl BookWithAuthor {
    /// Converts a joined book/author row pair to a domain model.
    pub fn from_entities(book: entity::book::Model, author: entity::author::Model) -> Self {
        Self {
            book: Book::from_entity(book),
            author: Author::from_entity(author),
        }
    }

    /// Converts to the DTO carrying `authorName = first + " " + last`.
    pub fn into_dto(self) -> BookWithConcatenatedAuthorNameDto {
        BookWithConcatenatedAuthorNameDto {
            id: self.book.id,
            author_name: self.author.full_name(),
            title: self.book.title,
            description: self.book.description,
        }
    }
}

/// Parameters for creating a book for an existing author.
#[derive(Debug, Clone)]
pub struct CreateBookParams {
    pub author_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    /// Creation-only, never persisted.
    pub page_count: Option<i32>,
}

impl CreateBookParams {
    /// Builds creation parameters from a validated request payload.
    ///
    /// # Arguments
    /// - `author_id` - Owning author ID from the request path
    /// - `dto` - Validated creation payload
    pub fn from_dto(author_id: Uuid, dto: BookForCreationDto) -> Self {
        Self {
            author_id,
            title: dto.title.unwrap_or_default(),
            description: dto.description,
            page_count: dto.page_count,
        }
    }
}
