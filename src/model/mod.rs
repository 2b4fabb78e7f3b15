//! API-facing data transfer objects.
//!
//! These are the shapes clients send and receive. They are distinct from the
//! SeaORM entities in the `entity` crate and from the server-side domain
//! models; conversions live next to the domain models in `server::model`.

pub mod api;
pub mod author;
pub mod book;
