//! Author fixtures for creating in-memory test data.

use entity::author;
use uuid::Uuid;

/// Default test author first name.
pub const DEFAULT_FIRST_NAME: &str = "George";

/// Default test author last name.
pub const DEFAULT_LAST_NAME: &str = "RR Martin";

/// Creates an author entity model with default values and a random ID.
///
/// # Default Values
/// - first_name: `"George"`
/// - last_name: `"RR Martin"`
///
/// # Returns
/// - `author::Model` - In-memory author entity
pub fn entity() -> author::Model {
    entity_builder().build()
}

/// Creates an author entity builder for customization.
pub fn entity_builder() -> AuthorEntityBuilder {
    AuthorEntityBuilder::default()
}

/// Builder for creating customized author entity models.
pub struct AuthorEntityBuilder {
    id: Uuid,
    first_name: String,
    last_name: String,
}

impl Default for AuthorEntityBuilder {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: DEFAULT_FIRST_NAME.to_string(),
            last_name: DEFAULT_LAST_NAME.to_string(),
        }
    }
}

impl AuthorEntityBuilder {
    /// Sets the author ID.
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Sets the author first name.
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    /// Sets the author last name.
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    /// Builds and returns the author entity model.
    pub fn build(self) -> author::Model {
        author::Model {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }
}
