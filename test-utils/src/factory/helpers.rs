//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an author owning `count` books.
///
/// Books are titled `"Book {n}"` with unique counter values so they sort in
/// creation order.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of books to create for the author
///
/// # Returns
/// - `Ok((author, books))` - The created author and its books
/// - `Err(DbErr)` - Database error during creation
pub async fn create_author_with_books(
    db: &DatabaseConnection,
    count: usize,
) -> Result<(entity::author::Model, Vec<entity::book::Model>), DbErr> {
    let author = crate::factory::author::create_author(db).await?;

    let mut books = Vec::with_capacity(count);
    for _ in 0..count {
        books.push(crate::factory::book::create_book(db, author.id).await?);
    }

    Ok((author, books))
}
