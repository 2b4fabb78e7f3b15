use axum::{
    middleware::from_fn_with_state,
    routing::{get, post, MethodRouter},
    Router,
};

use crate::server::{
    controller::{
        author::{get_author, get_authors, update_author},
        book::{create_book, get_book, get_books, CREATE_BOOK_MEDIA_TYPES, GET_BOOK_MEDIA_TYPES},
        docs::get_openapi_document,
        DEFAULT_MEDIA_TYPES,
    },
    middleware::negotiation::{require_accept, AcceptGate},
    state::AppState,
};

/// Puts the route behind the `Accept` header check for `gate`.
fn negotiated(route: MethodRouter<AppState>, gate: AcceptGate) -> MethodRouter<AppState> {
    route.route_layer(from_fn_with_state(gate, require_accept))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/authors",
            negotiated(get(get_authors), DEFAULT_MEDIA_TYPES),
        )
        .route(
            "/api/authors/{authorId}",
            negotiated(get(get_author).put(update_author), DEFAULT_MEDIA_TYPES),
        )
        .route(
            "/api/authors/{authorId}/books",
            negotiated(get(get_books), DEFAULT_MEDIA_TYPES)
                .merge(negotiated(post(create_book), CREATE_BOOK_MEDIA_TYPES)),
        )
        .route(
            "/api/authors/{authorId}/books/{bookId}",
            negotiated(get(get_book), GET_BOOK_MEDIA_TYPES),
        )
        .route(
            "/swagger/{document}/swagger.json",
            get(get_openapi_document),
        )
}
