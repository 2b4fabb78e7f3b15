use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};
use uuid::Uuid;

use crate::server::model::book::{Book, BookWithAuthor, CreateBookParams};

pub struct BookRepository<'a> {
    db: &'a DatabaseConnection,
    pending: Vec<entity::book::ActiveModel>,
}

impl<'a> BookRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            pending: Vec::new(),
        }
    }

    /// Gets all books of an author ordered by title
    pub async fn get_books(&self, author_id: Uuid) -> Result<Vec<Book>, DbErr> {
        let books = entity::prelude::Book::find()
            .filter(entity::book::Column::AuthorId.eq(author_id))
            .order_by_asc(entity::book::Column::Title)
            .all(self.db)
            .await?;

        Ok(books.into_iter().map(Book::from_entity).collect())
    }

    /// Gets a book by ID, scoped to its author.
    ///
    /// A book belonging to a different author is reported as missing.
    pub async fn get_book(&self, author_id: Uuid, book_id: Uuid) -> Result<Option<Book>, DbErr> {
        let book = entity::prelude::Book::find_by_id(book_id)
            .filter(entity::book::Column::AuthorId.eq(author_id))
            .one(self.db)
            .await?;

        Ok(book.map(Book::from_entity))
    }

    /// Gets a book by ID together with its author, scoped to the author
    pub async fn get_book_with_author(
        &self,
        author_id: Uuid,
        book_id: Uuid,
    ) -> Result<Option<BookWithAuthor>, DbErr> {
        let result = entity::prelude::Book::find_by_id(book_id)
            .filter(entity::book::Column::AuthorId.eq(author_id))
            .find_also_related(entity::prelude::Author)
            .one(self.db)
            .await?;

        let Some((book, author)) = result else {
            return Ok(None);
        };

        let author = author.ok_or_else(|| {
            DbErr::RecordNotFound(format!(
                "Author {} of book {} not found",
                book.author_id, book.id
            ))
        })?;

        Ok(Some(BookWithAuthor::from_entities(book, author)))
    }

    /// Stages a new book and returns it with its freshly assigned ID.
    ///
    /// Nothing is written until `save_changes` is called.
    pub fn add_book(&mut self, params: CreateBookParams) -> Book {
        let book = Book {
            id: Uuid::new_v4(),
            author_id: params.author_id,
            title: params.title,
            description: params.description,
        };

        self.pending.push(entity::book::ActiveModel {
            id: ActiveValue::Set(book.id),
            author_id: ActiveValue::Set(book.author_id),
            title: ActiveValue::Set(book.title.clone()),
            description: ActiveValue::Set(book.description.clone()),
        });

        book
    }

    /// Commits all staged books in one transaction.
    ///
    /// Staged changes are consumed whether or not the commit succeeds; on
    /// failure the transaction is rolled back and nothing is persisted.
    pub async fn save_changes(&mut self) -> Result<(), DbErr> {
        if self.pending.is_empty() {
            return Ok(());
        }

        let txn = self.db.begin().await?;

        for book in self.pending.drain(..) {
            if let Err(err) = book.insert(&txn).await {
                txn.rollback().await?;
                return Err(err);
            }
        }

        txn.commit().await
    }
}
