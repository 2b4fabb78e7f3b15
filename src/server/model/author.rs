//! Author domain model and update parameters.

use uuid::Uuid;

use crate::model::author::{AuthorDto, AuthorForUpdateDto};

/// An author as seen by the server.
#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::author::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
        }
    }

    /// First and last name separated by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> AuthorDto {
        AuthorDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }
}

/// Parameters for replacing an author's names.
#[derive(Debug, Clone)]
pub struct UpdateAuthorParams {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
}

impl UpdateAuthorParams {
    /// Builds update parameters from a validated request payload.
    ///
    /// # Arguments
    /// - `id` - Author ID from the request path
    /// - `dto` - Validated update payload
    pub fn from_dto(id: Uuid, dto: AuthorForUpdateDto) -> Self {
        Self {
            id,
            first_name: dto.first_name.unwrap_or_default(),
            last_name: dto.last_name.unwrap_or_default(),
        }
    }
}
