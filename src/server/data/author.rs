use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder, TransactionTrait,
};
use uuid::Uuid;

use crate::server::model::author::{Author, UpdateAuthorParams};

pub struct AuthorRepository<'a> {
    db: &'a DatabaseConnection,
    pending: Vec<entity::author::ActiveModel>,
}

impl<'a> AuthorRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            pending: Vec::new(),
        }
    }

    /// Checks whether an author with the given ID exists
    pub async fn author_exists(&self, id: Uuid) -> Result<bool, DbErr> {
        let count = entity::prelude::Author::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all authors ordered by first name, then last name
    pub async fn get_authors(&self) -> Result<Vec<Author>, DbErr> {
        let authors = entity::prelude::Author::find()
            .order_by_asc(entity::author::Column::FirstName)
            .order_by_asc(entity::author::Column::LastName)
            .all(self.db)
            .await?;

        Ok(authors.into_iter().map(Author::from_entity).collect())
    }

    /// Gets an author by ID
    pub async fn get_author(&self, id: Uuid) -> Result<Option<Author>, DbErr> {
        let author = entity::prelude::Author::find_by_id(id).one(self.db).await?;

        Ok(author.map(Author::from_entity))
    }

    /// Stages a replacement of the author's names.
    ///
    /// Nothing is written until `save_changes` is called.
    pub fn update_author(&mut self, params: UpdateAuthorParams) -> Author {
        self.pending.push(entity::author::ActiveModel {
            id: ActiveValue::Unchanged(params.id),
            first_name: ActiveValue::Set(params.first_name.clone()),
            last_name: ActiveValue::Set(params.last_name.clone()),
        });

        Author {
            id: params.id,
            first_name: params.first_name,
            last_name: params.last_name,
        }
    }

    /// Commits all staged updates in one transaction.
    ///
    /// Staged changes are consumed whether or not the commit succeeds; on
    /// failure the transaction is rolled back and nothing is persisted.
    pub async fn save_changes(&mut self) -> Result<(), DbErr> {
        if self.pending.is_empty() {
            return Ok(());
        }

        let txn = self.db.begin().await?;

        for author in self.pending.drain(..) {
            if let Err(err) = author.update(&txn).await {
                txn.rollback().await?;
                return Err(err);
            }
        }

        txn.commit().await
    }
}
