//! Database repository layer.
//!
//! Repositories wrap SeaORM queries for one aggregate each and return domain
//! models. Reads run immediately. Writes are staged on the repository and only
//! reach the database when `save_changes` commits them in a single
//! transaction, so a repository is constructed per request and dropped with it.

pub mod author;
pub mod book;

#[cfg(test)]
mod test;
