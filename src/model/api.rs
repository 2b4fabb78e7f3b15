use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// XML element names used when a DTO is written as `application/xml`.
///
/// `ELEMENT` names a single document root and each item of a collection,
/// `COLLECTION` names the root wrapping a collection (`ArrayOfBook`).
pub trait XmlElement {
    const ELEMENT: &'static str;
    const COLLECTION: &'static str;
}
