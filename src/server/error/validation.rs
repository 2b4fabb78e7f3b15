use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;
use utoipa::ToSchema;

/// Field-level validation failures keyed by PascalCase field name.
///
/// Serializes as `{"Title": ["The Title field is required."]}`.
#[derive(Error, Debug, Default, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(transparent)]
#[error("One or more validation errors occurred")]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }
}
