//! Book fixtures for creating in-memory test data.

use entity::book;
use uuid::Uuid;

/// Default test book title.
pub const DEFAULT_TITLE: &str = "A Game of Thrones";

/// Default test book description.
pub const DEFAULT_DESCRIPTION: &str =
    "The first novel in A Song of Ice and Fire, a series of fantasy novels.";

/// Creates a book entity model with default values.
///
/// The ID and author ID are random; set `author_id` through the builder when
/// the book must belong to an existing author.
///
/// # Default Values
/// - title: `"A Game of Thrones"`
/// - description: `Some(DEFAULT_DESCRIPTION)`
pub fn entity() -> book::Model {
    entity_builder().build()
}

/// Creates a book entity builder for customization.
pub fn entity_builder() -> BookEntityBuilder {
    BookEntityBuilder::default()
}

/// Builder for creating customized book entity models.
pub struct BookEntityBuilder {
    id: Uuid,
    author_id: Uuid,
    title: String,
    description: Option<String>,
}

impl Default for BookEntityBuilder {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            author_id: Uuid::new_v4(),
            title: DEFAULT_TITLE.to_string(),
            description: Some(DEFAULT_DESCRIPTION.to_string()),
        }
    }
}

impl BookEntityBuilder {
    /// Sets the book ID.
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Sets the owning author ID.
    pub fn author_id(mut self, author_id: Uuid) -> Self {
        self.author_id = author_id;
        self
    }

    /// Sets the book title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the book description.
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Builds and returns the book entity model.
    pub fn build(self) -> book::Model {
        book::Model {
            id: self.id,
            author_id: self.author_id,
            title: self.title,
            description: self.description,
        }
    }
}
