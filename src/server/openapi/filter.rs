//! Document filters applied while generating the OpenAPI documents.
//!
//! They only change the documents, never request handling.

use utoipa::{
    openapi::{
        content::{Content, ContentBuilder},
        path::{Operation, PathItem},
        response::ResponseBuilder,
        OpenApi, Ref, RefOr,
    },
    Modify, ToSchema,
};

use crate::{
    model::{
        api::ErrorDto,
        book::{BookForCreationWithAmountOfPagesDto, BookWithConcatenatedAuthorNameDto},
    },
    server::{
        controller::{
            book::{CREATE_BOOK_MEDIA_TYPES, GET_BOOK_MEDIA_TYPES},
            DEFAULT_MEDIA_TYPES,
        },
        middleware::negotiation::{AcceptGate, MediaType},
    },
};

/// Produced media types per operation ID.
const PRODUCES: &[(&str, AcceptGate)] = &[
    ("get_authors", DEFAULT_MEDIA_TYPES),
    ("get_author", DEFAULT_MEDIA_TYPES),
    ("update_author", DEFAULT_MEDIA_TYPES),
    ("get_books", DEFAULT_MEDIA_TYPES),
    ("get_book", GET_BOOK_MEDIA_TYPES),
    ("create_book", CREATE_BOOK_MEDIA_TYPES),
];

/// Responses every operation can produce regardless of its annotations.
const DEFAULT_RESPONSES: &[(&str, &str)] = &[
    ("400", "Unparsable path parameter or request body"),
    ("406", "None of the requested media types can be produced"),
    ("500", "Internal server error"),
];

fn operations_mut(item: &mut PathItem) -> impl Iterator<Item = &mut Operation> {
    [
        &mut item.get,
        &mut item.put,
        &mut item.post,
        &mut item.delete,
        &mut item.patch,
    ]
    .into_iter()
    .flatten()
}

fn find_operation<'a>(openapi: &'a mut OpenApi, operation_id: &str) -> Option<&'a mut Operation> {
    openapi
        .paths
        .paths
        .values_mut()
        .flat_map(operations_mut)
        .find(|operation| operation.operation_id.as_deref() == Some(operation_id))
}

fn schema_content(schema_name: impl Into<String>) -> Content {
    ContentBuilder::new()
        .schema(Some(RefOr::Ref(Ref::from_schema_name(schema_name))))
        .build()
}

/// Registers `schema_name` as the `status` response body under `media_type`.
fn set_response_content(
    openapi: &mut OpenApi,
    operation_id: &str,
    status: &str,
    media_type: MediaType,
    schema_name: impl Into<String>,
) {
    let Some(operation) = find_operation(openapi, operation_id) else {
        return;
    };

    if let Some(RefOr::T(response)) = operation.responses.responses.get_mut(status) {
        response
            .content
            .insert(media_type.as_str().to_string(), schema_content(schema_name));
    }
}

/// Copies the JSON body of each success response to every other media type
/// the operation produces.
pub struct ProducesFilter;

impl Modify for ProducesFilter {
    fn modify(&self, openapi: &mut OpenApi) {
        for item in openapi.paths.paths.values_mut() {
            for operation in operations_mut(item) {
                let Some((_, gate)) = PRODUCES
                    .iter()
                    .find(|(id, _)| operation.operation_id.as_deref() == Some(*id))
                else {
                    continue;
                };

                for (status, response) in operation.responses.responses.iter_mut() {
                    let RefOr::T(response) = response else {
                        continue;
                    };
                    if !status.starts_with('2') {
                        continue;
                    }
                    let Some(json) = response.content.get(MediaType::Json.as_str()).cloned() else {
                        continue;
                    };

                    for media_type in gate.media_types() {
                        response
                            .content
                            .entry(media_type.as_str().to_string())
                            .or_insert_with(|| json.clone());
                    }
                }
            }
        }
    }
}

/// Documents that request bodies are also accepted as XML.
pub struct ConsumesFilter;

impl Modify for ConsumesFilter {
    fn modify(&self, openapi: &mut OpenApi) {
        for item in openapi.paths.paths.values_mut() {
            for operation in operations_mut(item) {
                let Some(body) = operation.request_body.as_mut() else {
                    continue;
                };
                let Some(json) = body.content.get(MediaType::Json.as_str()).cloned() else {
                    continue;
                };

                body.content
                    .entry(MediaType::Xml.as_str().to_string())
                    .or_insert(json);
            }
        }
    }
}

/// Registers `BookWithConcatenatedAuthorName` as the `get_book` 200 body
/// under its vendor media type.
pub struct GetBookOperationFilter;

impl Modify for GetBookOperationFilter {
    fn modify(&self, openapi: &mut OpenApi) {
        set_response_content(
            openapi,
            "get_book",
            "200",
            MediaType::BookWithConcatenatedAuthorName,
            <BookWithConcatenatedAuthorNameDto as ToSchema>::name(),
        );
    }
}

/// Registers `BookForCreationWithAmountOfPages` as the `create_book` 201 body
/// under its vendor media type.
pub struct CreateBookOperationFilter;

impl Modify for CreateBookOperationFilter {
    fn modify(&self, openapi: &mut OpenApi) {
        set_response_content(
            openapi,
            "create_book",
            "201",
            MediaType::BookForCreationWithAmountOfPages,
            <BookForCreationWithAmountOfPagesDto as ToSchema>::name(),
        );
    }
}

/// Adds the 400, 406 and 500 responses to operations that do not declare them.
pub struct DefaultResponsesFilter;

impl Modify for DefaultResponsesFilter {
    fn modify(&self, openapi: &mut OpenApi) {
        for item in openapi.paths.paths.values_mut() {
            for operation in operations_mut(item) {
                for (status, description) in DEFAULT_RESPONSES {
                    operation
                        .responses
                        .responses
                        .entry(status.to_string())
                        .or_insert_with(|| {
                            let response = ResponseBuilder::new().description(*description);
                            let response = if *status == "406" {
                                response
                            } else {
                                response.content(
                                    MediaType::Json.as_str(),
                                    schema_content(<ErrorDto as ToSchema>::name()),
                                )
                            };

                            RefOr::T(response.build())
                        });
                }
            }
        }
    }
}
