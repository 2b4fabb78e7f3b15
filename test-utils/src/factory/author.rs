//! Author factory for creating test author entities.

use crate::{factory::helpers::next_id, fixture};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test authors with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::author::AuthorFactory;
///
/// let author = AuthorFactory::new(&db)
///     .first_name("Stephen")
///     .last_name("Fry")
///     .build()
///     .await?;
/// ```
pub struct AuthorFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::author::Model,
}

impl<'a> AuthorFactory<'a> {
    /// Creates a new AuthorFactory with default values.
    ///
    /// Defaults come from `fixture::author` with a numbered last name so
    /// multiple authors in one test stay distinguishable.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::author::entity_builder()
            .last_name(format!("{} {}", fixture::author::DEFAULT_LAST_NAME, id))
            .build();

        Self { db, entity }
    }

    /// Sets the author first name.
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.entity.first_name = first_name.into();
        self
    }

    /// Sets the author last name.
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.entity.last_name = last_name.into();
        self
    }

    /// Builds and inserts the author entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::author::Model)` - Created author entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::author::Model, DbErr> {
        entity::author::ActiveModel {
            id: ActiveValue::Set(self.entity.id),
            first_name: ActiveValue::Set(self.entity.first_name),
            last_name: ActiveValue::Set(self.entity.last_name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an author with default values.
///
/// Shorthand for `AuthorFactory::new(db).build().await`.
pub async fn create_author(db: &DatabaseConnection) -> Result<entity::author::Model, DbErr> {
    AuthorFactory::new(db).build().await
}
