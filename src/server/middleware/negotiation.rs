//! Accept-header content negotiation.
//!
//! Every route declares the media types it can produce as an `AcceptGate`.
//! `require_accept` runs in front of the handler, picks the first declared
//! media type contained in the request's `Accept` header and stores it as a
//! request extension, or answers 406 without running the handler.

use axum::{
    extract::{Request, State},
    http::header::ACCEPT,
    middleware::Next,
    response::Response,
};

use crate::server::error::AppError;

/// A media type the API can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    Json,
    Xml,
    /// Vendor alias of `Json` for the plain book representation.
    Book,
    BookWithConcatenatedAuthorName,
    BookForCreationWithAmountOfPages,
}

impl MediaType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Xml => "application/xml",
            Self::Book => "application/vnd.marvin.book+json",
            Self::BookWithConcatenatedAuthorName => {
                "application/vnd.marvin.bookwithconcatenatedauthorname+json"
            }
            Self::BookForCreationWithAmountOfPages => {
                "application/vnd.marvin.bookforcreationwithamountofpages+json"
            }
        }
    }

    pub fn is_xml(self) -> bool {
        self == Self::Xml
    }
}

/// Ordered whitelist of media types a route produces, most specific first.
#[derive(Debug, Clone, Copy)]
pub struct AcceptGate {
    media_types: &'static [MediaType],
}

impl AcceptGate {
    pub const fn new(media_types: &'static [MediaType]) -> Self {
        Self { media_types }
    }

    pub fn media_types(&self) -> &'static [MediaType] {
        self.media_types
    }

    /// Selects the media type to respond with.
    ///
    /// Walks the whitelist in order and returns the first entry that occurs,
    /// case-insensitively, anywhere in `accept`. Quality values are not
    /// interpreted. A missing or empty header, or one containing `*/*`,
    /// falls back to `application/json` when no entry matched.
    ///
    /// # Returns
    /// - `Ok(MediaType)` - Selected media type
    /// - `Err(AppError::NotAcceptable)` - No whitelisted type is accepted
    pub fn negotiate(&self, accept: Option<&str>) -> Result<MediaType, AppError> {
        let accept = accept.unwrap_or_default().trim().to_ascii_lowercase();

        if let Some(media_type) = self
            .media_types
            .iter()
            .copied()
            .find(|m| accept.contains(m.as_str()))
        {
            return Ok(media_type);
        }

        let accepts_any = accept.is_empty() || accept.contains("*/*");
        if accepts_any && self.media_types.contains(&MediaType::Json) {
            return Ok(MediaType::Json);
        }

        Err(AppError::NotAcceptable(accept))
    }
}

/// Middleware rejecting requests whose `Accept` header matches none of the
/// gate's media types.
///
/// The selected `MediaType` is inserted into the request extensions for the
/// handler to pick its response shape.
pub async fn require_accept(
    State(gate): State<AcceptGate>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let accept = request
        .headers()
        .get(ACCEPT)
        .and_then(|value| value.to_str().ok());

    let media_type = gate.negotiate(accept)?;
    request.extensions_mut().insert(media_type);

    Ok(next.run(request).await)
}
