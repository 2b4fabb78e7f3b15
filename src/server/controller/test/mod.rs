use axum::{
    body::Body,
    http::{
        header::{ACCEPT, CONTENT_TYPE, LOCATION},
        Method, Request, Response, StatusCode,
    },
    Router,
};
use sea_orm::{DatabaseConnection, DbErr};
use serde_json::Value;
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;
use uuid::Uuid;

use crate::server::{router::router, state::AppState};

mod docs;

const APP_URL: &str = "http://localhost:8080";

async fn setup() -> TestContext {
    TestBuilder::new()
        .with_library_tables()
        .build()
        .await
        .unwrap()
}

fn app(db: &DatabaseConnection) -> Router {
    router().with_state(AppState::new(db.clone(), APP_URL.to_string()))
}

/// Sends a request with optional `Accept` and `Content-Type` headers.
async fn send(
    db: &DatabaseConnection,
    method: Method,
    uri: &str,
    accept: Option<&str>,
    body: Option<(&str, String)>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(accept) = accept {
        builder = builder.header(ACCEPT, accept);
    }

    let request = match body {
        Some((content_type, body)) => builder
            .header(CONTENT_TYPE, content_type)
            .body(Body::from(body))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app(db).oneshot(request).await.unwrap()
}

async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}
