use crate::server::{data::author::AuthorRepository, model::author::UpdateAuthorParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod author_exists;
mod get_author;
mod get_authors;
mod update_author;
