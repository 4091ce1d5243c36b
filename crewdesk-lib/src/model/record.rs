//! Dynamic entity record

use std::collections::HashMap;

use chrono::DateTime;
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use super::EntityKind;
use super::Value;
use super::types::Money;
use super::types::TagSet;
use crate::error::FieldError;

/// One back-office entity instance.
///
/// Records hold field values as a `HashMap<String, Value>`, allowing the
/// filter, sort, and selection layer to be generic over all entity kinds.
/// Typed getter methods provide safe access with proper error handling.
///
/// # Example
///
/// ```
/// use crewdesk_lib::model::{EntityKind, Record};
///
/// let record = Record::new(EntityKind::Candidate)
///     .set("name", "Alex Thompson")
///     .set("status", "Available");
///
/// assert_eq!(record.get_string("name").unwrap(), Some("Alex Thompson"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// The entity kind this record belongs to.
    pub(crate) kind: EntityKind,

    /// The unique identifier of the record.
    pub(crate) id: Uuid,

    /// The field values.
    pub(crate) fields: HashMap<String, Value>,
}

impl Record {
    /// Creates a new record of the given kind with a fresh random id.
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            id: Uuid::new_v4(),
            fields: HashMap::new(),
        }
    }

    /// Creates a new record with the given id.
    pub fn with_id(kind: EntityKind, id: Uuid) -> Self {
        Self {
            kind,
            id,
            fields: HashMap::new(),
        }
    }

    // =========================================================================
    // Metadata accessors
    // =========================================================================

    /// Returns the entity kind.
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Returns the record id.
    pub fn id(&self) -> Uuid {
        self.id
    }

    // =========================================================================
    // Raw field access
    // =========================================================================

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns `true` if the record contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns a reference to all fields.
    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Inserts a field value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Removes a field and returns its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    // =========================================================================
    // Typed getters
    //
    // Return Err if field is missing or wrong type.
    // Return Ok(None) only if the field exists and is Value::Null.
    // =========================================================================

    /// Gets a string field value.
    pub fn get_string(&self, field: &str) -> Result<Option<&str>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(self.kind, field)),
            Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(FieldError::type_mismatch(
                self.kind,
                field,
                "string",
                other.type_name(),
            )),
        }
    }

    /// Gets a boolean field value.
    pub fn get_bool(&self, field: &str) -> Result<Option<bool>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(self.kind, field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(FieldError::type_mismatch(
                self.kind,
                field,
                "bool",
                other.type_name(),
            )),
        }
    }

    /// Gets an i32 field value.
    pub fn get_int(&self, field: &str) -> Result<Option<i32>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(self.kind, field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Int(n)) => Ok(Some(*n)),
            Some(other) => Err(FieldError::type_mismatch(
                self.kind,
                field,
                "int",
                other.type_name(),
            )),
        }
    }

    /// Gets an i64 field value.
    pub fn get_long(&self, field: &str) -> Result<Option<i64>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(self.kind, field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Long(n)) => Ok(Some(*n)),
            Some(Value::Int(n)) => Ok(Some(*n as i64)), // Allow widening
            Some(other) => Err(FieldError::type_mismatch(
                self.kind,
                field,
                "long",
                other.type_name(),
            )),
        }
    }

    /// Gets an f64 field value.
    pub fn get_float(&self, field: &str) -> Result<Option<f64>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(self.kind, field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Float(n)) => Ok(Some(*n)),
            Some(other) => Err(FieldError::type_mismatch(
                self.kind,
                field,
                "float",
                other.type_name(),
            )),
        }
    }

    /// Gets a Decimal field value.
    pub fn get_decimal(&self, field: &str) -> Result<Option<Decimal>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(self.kind, field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Decimal(d)) => Ok(Some(*d)),
            Some(other) => Err(FieldError::type_mismatch(
                self.kind,
                field,
                "decimal",
                other.type_name(),
            )),
        }
    }

    /// Gets a UUID field value.
    pub fn get_guid(&self, field: &str) -> Result<Option<Uuid>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(self.kind, field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Guid(g)) => Ok(Some(*g)),
            Some(other) => Err(FieldError::type_mismatch(
                self.kind,
                field,
                "guid",
                other.type_name(),
            )),
        }
    }

    /// Gets a DateTime field value.
    pub fn get_datetime(&self, field: &str) -> Result<Option<DateTime<Utc>>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(self.kind, field)),
            Some(Value::Null) => Ok(None),
            Some(Value::DateTime(dt)) => Ok(Some(*dt)),
            Some(other) => Err(FieldError::type_mismatch(
                self.kind,
                field,
                "datetime",
                other.type_name(),
            )),
        }
    }

    /// Gets a Money field value.
    pub fn get_money(&self, field: &str) -> Result<Option<Money>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(self.kind, field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Money(m)) => Ok(Some(*m)),
            Some(other) => Err(FieldError::type_mismatch(
                self.kind,
                field,
                "money",
                other.type_name(),
            )),
        }
    }

    /// Gets a TagSet field value.
    pub fn get_tags(&self, field: &str) -> Result<Option<&TagSet>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(self.kind, field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Tags(tags)) => Ok(Some(tags)),
            Some(other) => Err(FieldError::type_mismatch(
                self.kind,
                field,
                "tags",
                other.type_name(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_getters() {
        let record = Record::new(EntityKind::Candidate)
            .set("name", "Maria Rodriguez")
            .set("open_roles", 3i32)
            .set("skills", vec!["React".to_string()])
            .set("notes", Value::Null);

        assert_eq!(record.get_string("name").unwrap(), Some("Maria Rodriguez"));
        assert_eq!(record.get_int("open_roles").unwrap(), Some(3));
        assert!(record.get_tags("skills").unwrap().unwrap().contains("react"));

        // Null field reads as Ok(None) for any type.
        assert_eq!(record.get_string("notes").unwrap(), None);
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let record = Record::new(EntityKind::User);
        assert!(matches!(
            record.get_string("name"),
            Err(FieldError::Missing { .. })
        ));
    }

    #[test]
    fn test_type_mismatch() {
        let record = Record::new(EntityKind::Client).set("company", "Initech");
        assert!(matches!(
            record.get_int("company"),
            Err(FieldError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_field_errors_carry_the_entity_kind() {
        let record = Record::new(EntityKind::Client).set("company", "Initech");
        match record.get_int("company") {
            Err(FieldError::TypeMismatch {
                kind,
                expected,
                actual,
                ..
            }) => {
                assert_eq!(kind, EntityKind::Client);
                assert_eq!(expected, "int");
                assert_eq!(actual, "string");
            }
            other => panic!("unexpected result: {:?}", other),
        }
        match record.get_string("industry") {
            Err(FieldError::Missing { kind, field }) => {
                assert_eq!(kind, EntityKind::Client);
                assert_eq!(field, "industry");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_int_widens_to_long() {
        let record = Record::new(EntityKind::Transaction).set("amount_units", 7i32);
        assert_eq!(record.get_long("amount_units").unwrap(), Some(7));
    }
}
