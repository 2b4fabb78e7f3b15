use crate::server::{data::book::BookRepository, model::book::CreateBookParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod add_book;
mod get_book;
mod get_book_with_author;
mod get_books;
