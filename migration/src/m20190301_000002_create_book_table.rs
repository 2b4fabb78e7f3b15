use sea_orm_migration::{prelude::*, schema::*};

use super::m20190301_000001_create_author_table::Author;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Book::Table)
                    .if_not_exists()
                    .col(uuid(Book::Id).primary_key())
                    .col(uuid(Book::AuthorId))
                    .col(string_len(Book::Title, 150))
                    .col(string_len_null(Book::Description, 2500))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_book_author_id")
                            .from(Book::Table, Book::AuthorId)
                            .to(Author::Table, Author::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_book_author_id")
                    .table(Book::Table)
                    .col(Book::AuthorId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Book::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Book {
    Table,
    Id,
    AuthorId,
    Title,
    Description,
}
