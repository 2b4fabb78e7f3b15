//! SeaORM entities for the library database.
//!
//! One module per table. `prelude` re-exports the entity types under their
//! table names for use in queries and test schema builders.

pub mod author;
pub mod book;
pub mod prelude;
