//! OpenAPI documents describing the HTTP API.
//!
//! Two documents are generated once at startup from the `#[utoipa::path]`
//! annotations on the controllers: one for authors, one for books. Document
//! metadata comes from `DOCUMENTS`; the filters in `filter` then fill in the
//! media types that annotations alone cannot express.

pub mod filter;

use std::collections::BTreeMap;

use utoipa::{
    openapi::info::{ContactBuilder, InfoBuilder, LicenseBuilder},
    OpenApi,
};

use crate::{
    model::{
        api::ErrorDto,
        author::{AuthorDto, AuthorForUpdateDto},
        book::{
            BookDto, BookForCreationDto, BookForCreationWithAmountOfPagesDto,
            BookWithConcatenatedAuthorNameDto,
        },
    },
    server::{
        controller::{author, book},
        error::validation::ValidationErrors,
        openapi::filter::{
            ConsumesFilter, CreateBookOperationFilter, DefaultResponsesFilter,
            GetBookOperationFilter, ProducesFilter,
        },
    },
};

const CONTACT_NAME: &str = "Flavia Demo";
const CONTACT_EMAIL: &str = "flavia.bajan@gamil.com";
const CONTACT_URL: &str = "https://github.com/bajanf";
const LICENSE_NAME: &str = "MIT License";
const LICENSE_URL: &str = "https://opensource.org/licenses/MIT";

#[derive(OpenApi)]
#[openapi(
    paths(author::get_authors, author::get_author, author::update_author),
    components(schemas(AuthorDto, AuthorForUpdateDto, ErrorDto, ValidationErrors)),
    tags((name = "authors", description = "Authors of the library")),
    modifiers(&ProducesFilter, &ConsumesFilter, &DefaultResponsesFilter)
)]
pub struct AuthorsApiDoc;

#[derive(OpenApi)]
#[openapi(
    paths(book::get_books, book::get_book, book::create_book),
    components(schemas(
        BookDto,
        BookForCreationDto,
        BookForCreationWithAmountOfPagesDto,
        BookWithConcatenatedAuthorNameDto,
        ErrorDto,
        ValidationErrors
    )),
    tags((name = "books", description = "Books of the library, grouped by author")),
    modifiers(
        &ProducesFilter,
        &ConsumesFilter,
        &GetBookOperationFilter,
        &CreateBookOperationFilter,
        &DefaultResponsesFilter
    )
)]
pub struct BooksApiDoc;

/// Metadata of one served OpenAPI document.
pub struct DocumentConfig {
    /// Name used in `/swagger/{name}/swagger.json`.
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    pub openapi: fn() -> utoipa::openapi::OpenApi,
}

pub const DOCUMENTS: &[DocumentConfig] = &[
    DocumentConfig {
        name: "OpenAPISpecAuthors",
        title: "Library API (Authors)",
        description: "Through this API you can access authors.",
        version: "v1",
        openapi: AuthorsApiDoc::openapi,
    },
    DocumentConfig {
        name: "OpenAPISpecBooks",
        title: "Library API (Books)",
        description: "Through this API you can access books of an author.",
        version: "v1",
        openapi: BooksApiDoc::openapi,
    },
];

impl DocumentConfig {
    fn build(&self) -> utoipa::openapi::OpenApi {
        let mut openapi = (self.openapi)();

        openapi.info = InfoBuilder::new()
            .title(self.title)
            .version(self.version)
            .description(Some(self.description))
            .contact(Some(
                ContactBuilder::new()
                    .name(Some(CONTACT_NAME))
                    .email(Some(CONTACT_EMAIL))
                    .url(Some(CONTACT_URL))
                    .build(),
            ))
            .license(Some(
                LicenseBuilder::new()
                    .name(LICENSE_NAME)
                    .url(Some(LICENSE_URL))
                    .build(),
            ))
            .build();

        openapi
    }
}

/// Generated OpenAPI documents keyed by name.
pub struct ApiDocuments {
    documents: BTreeMap<&'static str, utoipa::openapi::OpenApi>,
}

impl ApiDocuments {
    pub fn generate() -> Self {
        let documents = DOCUMENTS
            .iter()
            .map(|config| (config.name, config.build()))
            .collect();

        Self { documents }
    }

    pub fn get(&self, name: &str) -> Option<&utoipa::openapi::OpenApi> {
        self.documents.get(name)
    }
}
