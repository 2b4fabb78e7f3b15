//! HTTP request handlers.
//!
//! Each resource module declares the media types its endpoints produce as
//! `AcceptGate` constants next to the handlers; the router applies them and
//! the OpenAPI filters document them.

use crate::server::middleware::negotiation::{AcceptGate, MediaType};

pub mod author;
pub mod book;
pub mod docs;

#[cfg(test)]
mod test;

/// Media types produced by endpoints without a vendor representation.
pub const DEFAULT_MEDIA_TYPES: AcceptGate = AcceptGate::new(&[MediaType::Json, MediaType::Xml]);
