//! Domain models and operation parameters.
//!
//! Domain models sit between SeaORM entities and API DTOs. Every conversion
//! is an explicit function on the model: `from_entity` at the repository
//! boundary, `into_dto` at the controller boundary and `from_dto` for
//! request payloads.

pub mod author;
pub mod book;
