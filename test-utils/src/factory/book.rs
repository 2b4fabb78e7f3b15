//! Book factory for creating test book entities.

use crate::{factory::helpers::next_id, fixture};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test books with customizable fields.
///
/// The owning author must already exist; the book table enforces the
/// foreign key.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::book::BookFactory;
///
/// let book = BookFactory::new(&db, author.id)
///     .title("The Winds of Winter")
///     .description(None)
///     .build()
///     .await?;
/// ```
pub struct BookFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::book::Model,
}

impl<'a> BookFactory<'a> {
    /// Creates a new BookFactory for the given author with default values.
    ///
    /// The default title is `"Book {n}"` where n is a unique counter value.
    pub fn new(db: &'a DatabaseConnection, author_id: Uuid) -> Self {
        let id = next_id();
        let entity = fixture::book::entity_builder()
            .author_id(author_id)
            .title(format!("Book {:06}", id))
            .build();

        Self { db, entity }
    }

    /// Sets the book title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.entity.title = title.into();
        self
    }

    /// Sets the book description.
    pub fn description(mut self, description: Option<String>) -> Self {
        self.entity.description = description;
        self
    }

    /// Builds and inserts the book entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::book::Model)` - Created book entity
    /// - `Err(DbErr)` - Database error during insert, including a missing author
    pub async fn build(self) -> Result<entity::book::Model, DbErr> {
        entity::book::ActiveModel {
            id: ActiveValue::Set(self.entity.id),
            author_id: ActiveValue::Set(self.entity.author_id),
            title: ActiveValue::Set(self.entity.title),
            description: ActiveValue::Set(self.entity.description),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a book with default values for the given author.
///
/// Shorthand for `BookFactory::new(db, author_id).build().await`.
pub async fn create_book(
    db: &DatabaseConnection,
    author_id: Uuid,
) -> Result<entity::book::Model, DbErr> {
    BookFactory::new(db, author_id).build().await
}
