//! Declarative request validation.
//!
//! Each request payload declares its constraints as a static table of
//! `FieldRule`s and exposes its field values by name. `Validate::validate`
//! walks the table and collects every failure, so a client sees all problems
//! with a payload in one 422 response.

use crate::{
    model::{author::AuthorForUpdateDto, book::BookForCreationDto},
    server::error::validation::ValidationErrors,
};

/// A single constraint on a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Value must be present and not blank.
    Required,
    /// Text must not be longer than this many characters.
    MaxLength(usize),
    /// Number, when present, must be at least this value.
    Min(i64),
}

/// Constraints declared for one field, keyed by its PascalCase name.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub constraints: &'static [Constraint],
}

/// A field value as seen by the validator.
#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
    Text(Option<&'a str>),
    Number(Option<i64>),
}

pub trait Validate {
    /// Constraint table for this payload.
    const RULES: &'static [FieldRule];

    /// Looks up a field by the name used in `RULES`.
    fn field(&self, name: &str) -> FieldValue<'_>;

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        for rule in Self::RULES {
            let value = self.field(rule.field);
            for constraint in rule.constraints {
                if let Some(message) = check(rule.field, *constraint, value) {
                    errors.add(rule.field, message);
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn check(field: &str, constraint: Constraint, value: FieldValue<'_>) -> Option<String> {
    match (constraint, value) {
        (Constraint::Required, FieldValue::Text(text)) => text
            .map_or(true, |t| t.trim().is_empty())
            .then(|| format!("The {} field is required.", field)),
        (Constraint::Required, FieldValue::Number(number)) => number
            .is_none()
            .then(|| format!("The {} field is required.", field)),
        (Constraint::MaxLength(max), FieldValue::Text(Some(text))) => {
            (text.chars().count() > max).then(|| {
                format!(
                    "The field {} must be a string with a maximum length of '{}'.",
                    field, max
                )
            })
        }
        (Constraint::Min(min), FieldValue::Number(Some(number))) => (number < min).then(|| {
            format!(
                "The field {} must be greater than or equal to {}.",
                field, min
            )
        }),
        _ => None,
    }
}

impl Validate for BookForCreationDto {
    const RULES: &'static [FieldRule] = &[
        FieldRule {
            field: "Title",
            constraints: &[Constraint::Required, Constraint::MaxLength(150)],
        },
        FieldRule {
            field: "Description",
            constraints: &[Constraint::MaxLength(2500)],
        },
        FieldRule {
            field: "PageCount",
            constraints: &[Constraint::Min(1)],
        },
    ];

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "Title" => FieldValue::Text(self.title.as_deref()),
            "Description" => FieldValue::Text(self.description.as_deref()),
            "PageCount" => FieldValue::Number(self.page_count.map(i64::from)),
            _ => FieldValue::Text(None),
        }
    }
}

impl Validate for AuthorForUpdateDto {
    const RULES: &'static [FieldRule] = &[
        FieldRule {
            field: "FirstName",
            constraints: &[Constraint::Required, Constraint::MaxLength(150)],
        },
        FieldRule {
            field: "LastName",
            constraints: &[Constraint::Required, Constraint::MaxLength(150)],
        },
    ];

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "FirstName" => FieldValue::Text(self.first_name.as_deref()),
            "LastName" => FieldValue::Text(self.last_name.as_deref()),
            _ => FieldValue::Text(None),
        }
    }
}
