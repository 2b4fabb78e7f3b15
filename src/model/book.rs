use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::api::XmlElement;

/// A book with id, author id, title and description.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookDto {
    /// The id of the book
    pub id: Uuid,
    /// The id of the book author
    pub author_id: Uuid,
    /// The title of the book
    pub title: String,
    /// An optional description of the book
    pub description: Option<String>,
}

impl XmlElement for BookDto {
    const ELEMENT: &'static str = "Book";
    const COLLECTION: &'static str = "ArrayOfBook";
}

/// A book whose author is given by name instead of by id.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookWithConcatenatedAuthorNameDto {
    /// The id of the book
    pub id: Uuid,
    /// First and last name of the author, separated by a space
    pub author_name: String,
    /// The title of the book
    pub title: String,
    /// An optional description of the book
    pub description: Option<String>,
}

impl XmlElement for BookWithConcatenatedAuthorNameDto {
    const ELEMENT: &'static str = "BookWithConcatenatedAuthorName";
    const COLLECTION: &'static str = "ArrayOfBookWithConcatenatedAuthorName";
}

/// A book to create for an author.
///
/// `pageCount` is accepted on creation but is not stored with the book. A
/// missing or null title is left to validation rather than rejected as
/// unparsable input.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookForCreationDto {
    /// The title of the book
    #[serde(default)]
    #[schema(required = true, max_length = 150)]
    pub title: Option<String>,
    /// The description of the book
    #[serde(default)]
    #[schema(max_length = 2500)]
    pub description: Option<String>,
    /// The number of pages of the book
    #[serde(default)]
    #[schema(minimum = 1)]
    pub page_count: Option<i32>,
}

/// A created book echoed back together with its amount of pages.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookForCreationWithAmountOfPagesDto {
    /// The title of the book
    pub title: String,
    /// The description of the book
    pub description: Option<String>,
    /// The amount of pages submitted with the book
    pub amount_of_pages: Option<i32>,
}

impl XmlElement for BookForCreationWithAmountOfPagesDto {
    const ELEMENT: &'static str = "BookForCreationWithAmountOfPages";
    const COLLECTION: &'static str = "ArrayOfBookForCreationWithAmountOfPages";
}
