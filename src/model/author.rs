use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::api::XmlElement;

/// An author with id, first name and last name.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDto {
    /// The id of the author
    pub id: Uuid,
    /// The first name of the author
    pub first_name: String,
    /// The last name of the author
    pub last_name: String,
}

impl XmlElement for AuthorDto {
    const ELEMENT: &'static str = "Author";
    const COLLECTION: &'static str = "ArrayOfAuthor";
}

/// An author with first name and last name fields, used to update an author.
///
/// Missing and null names deserialize as `None` so that they are reported as
/// validation errors rather than as unparsable input.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorForUpdateDto {
    /// The first name of the author
    #[serde(default)]
    #[schema(required = true, max_length = 150)]
    pub first_name: Option<String>,
    /// The last name of the author
    #[serde(default)]
    #[schema(required = true, max_length = 150)]
    pub last_name: Option<String>,
}
