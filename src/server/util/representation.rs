//! JSON and XML request and response bodies.
//!
//! Responses are written in the media type selected by the negotiation
//! middleware; request bodies are read according to their `Content-Type`.

use axum::{
    body::{Body, Bytes},
    extract::{FromRequest, Request},
    http::{
        header::{CONTENT_TYPE, LOCATION},
        HeaderValue, StatusCode,
    },
    response::{IntoResponse, Response},
};
use serde::{de::DeserializeOwned, ser::SerializeStruct, Serialize, Serializer};

use crate::{
    model::api::XmlElement,
    server::{error::AppError, middleware::negotiation::MediaType},
};

/// A response body written in the negotiated media type.
///
/// Every media type other than `application/xml` is written as JSON; the
/// negotiated type is always echoed as `Content-Type`.
pub struct Negotiated<T> {
    status: StatusCode,
    media_type: MediaType,
    location: Option<String>,
    value: T,
    to_xml: fn(&T) -> Result<String, String>,
}

impl<T: Serialize + XmlElement> Negotiated<T> {
    /// 200 OK with a single resource.
    pub fn ok(media_type: MediaType, value: T) -> Self {
        Self {
            status: StatusCode::OK,
            media_type,
            location: None,
            value,
            to_xml: |value| {
                quick_xml::se::to_string_with_root(T::ELEMENT, value).map_err(|e| e.to_string())
            },
        }
    }

    /// 201 Created with the new resource and its `Location`.
    pub fn created(media_type: MediaType, value: T, location: String) -> Self {
        Self {
            status: StatusCode::CREATED,
            location: Some(location),
            ..Self::ok(media_type, value)
        }
    }
}

impl<T: Serialize + XmlElement> Negotiated<Vec<T>> {
    /// 200 OK with a collection, wrapped in `T::COLLECTION` when written as XML.
    pub fn collection(media_type: MediaType, items: Vec<T>) -> Self {
        Self {
            status: StatusCode::OK,
            media_type,
            location: None,
            value: items,
            to_xml: |items| {
                let sequence = XmlSequence {
                    element: T::ELEMENT,
                    items,
                };

                quick_xml::se::to_string_with_root(T::COLLECTION, &sequence)
                    .map_err(|e| e.to_string())
            },
        }
    }
}

impl<T: Serialize> Negotiated<T> {
    fn render(&self) -> Result<Vec<u8>, AppError> {
        if self.media_type.is_xml() {
            (self.to_xml)(&self.value)
                .map(String::into_bytes)
                .map_err(AppError::InternalError)
        } else {
            serde_json::to_vec(&self.value).map_err(|e| AppError::InternalError(e.to_string()))
        }
    }
}

impl<T: Serialize> IntoResponse for Negotiated<T> {
    fn into_response(self) -> Response {
        let body = match self.render() {
            Ok(body) => body,
            Err(err) => return err.into_response(),
        };

        let mut response = (self.status, Body::from(body)).into_response();
        let headers = response.headers_mut();

        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static(self.media_type.as_str()),
        );

        if let Some(location) = self.location {
            match HeaderValue::try_from(location) {
                Ok(value) => {
                    headers.insert(LOCATION, value);
                }
                Err(e) => return AppError::InternalError(e.to_string()).into_response(),
            }
        }

        response
    }
}

/// Items of an XML collection, each written as an `element` child.
struct XmlSequence<'a, T> {
    element: &'static str,
    items: &'a [T],
}

impl<T: Serialize> Serialize for XmlSequence<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("XmlSequence", 1)?;
        state.serialize_field(self.element, self.items)?;
        state.end()
    }
}

/// Request body read as JSON or XML depending on its `Content-Type`.
///
/// Any other or missing `Content-Type` is rejected with 415; a body that
/// does not parse is rejected with 400.
pub struct NegotiatedBody<T>(pub T);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyFormat {
    Json,
    Xml,
}

impl BodyFormat {
    /// Reads the body format from a `Content-Type` value.
    ///
    /// JSON is `application/json` or any `+json` suffix; XML is
    /// `application/xml`, `text/xml` or any `+xml` suffix. Parameters such as
    /// `charset` are ignored.
    fn from_content_type(content_type: &str) -> Option<Self> {
        let mime: mime::Mime = content_type.parse().ok()?;

        let is = |type_: mime::Name, subtype: mime::Name| {
            (mime.type_() == type_ && mime.subtype() == subtype) || mime.suffix() == Some(subtype)
        };

        if is(mime::APPLICATION, mime::JSON) {
            Some(Self::Json)
        } else if is(mime::APPLICATION, mime::XML) || is(mime::TEXT, mime::XML) {
            Some(Self::Xml)
        } else {
            None
        }
    }
}

impl<S, T> FromRequest<S> for NegotiatedBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();

        let Some(format) = BodyFormat::from_content_type(&content_type) else {
            return Err(AppError::UnsupportedMediaType(format!(
                "Unsupported content type '{}', expected application/json or application/xml",
                content_type
            )));
        };

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::UnparsableInput(rejection.body_text()))?;

        let value = match format {
            BodyFormat::Json => serde_json::from_slice(&bytes)
                .map_err(|e| AppError::UnparsableInput(e.to_string()))?,
            BodyFormat::Xml => {
                let text = std::str::from_utf8(&bytes)
                    .map_err(|e| AppError::UnparsableInput(e.to_string()))?;
                quick_xml::de::from_str(text)
                    .map_err(|e| AppError::UnparsableInput(e.to_string()))?
            }
        };

        Ok(Self(value))
    }
}
