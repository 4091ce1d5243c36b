//! FieldError for typed record accessors

use crate::model::EntityKind;

/// Error type for typed field access on a back-office record.
///
/// Carries the record's entity kind so a log line pinpoints which tab's
/// schema drifted from what a view expected.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FieldError {
    /// The record carries no such field.
    #[error("{kind} record has no field '{field}'")]
    Missing { kind: EntityKind, field: String },

    /// The field exists but holds a different value shape than requested.
    #[error("{kind} record field '{field}' holds {actual}, expected {expected}")]
    TypeMismatch {
        kind: EntityKind,
        field: String,
        expected: &'static str,
        actual: &'static str,
    },
}

impl FieldError {
    /// Creates a new missing field error.
    pub fn missing(kind: EntityKind, field: impl Into<String>) -> Self {
        Self::Missing {
            kind,
            field: field.into(),
        }
    }

    /// Creates a new type mismatch error.
    pub fn type_mismatch(
        kind: EntityKind,
        field: impl Into<String>,
        expected: &'static str,
        actual: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            kind,
            field: field.into(),
            expected,
            actual,
        }
    }
}
