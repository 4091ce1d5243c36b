//! Value enum for dynamic field values

use chrono::DateTime;
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use super::types::Money;
use super::types::TagSet;

/// A dynamic value that can hold any back-office field type.
///
/// This enum represents all possible values that can be stored in a record
/// field. It's used in [`Record`](super::Record) to store field values
/// dynamically, so the filter and sort layer can work over any entity kind
/// without knowing its schema.
///
/// # Example
///
/// ```
/// use crewdesk_lib::model::Value;
///
/// let name = Value::from("Alex Thompson");
/// let salary = Value::from(85_000i64);
/// let active = Value::from(true);
/// let empty = Value::Null;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/empty value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 32-bit integer.
    Int(i32),
    /// 64-bit integer.
    Long(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Arbitrary precision decimal.
    Decimal(Decimal),
    /// String value.
    String(String),
    /// GUID/UUID value.
    Guid(Uuid),
    /// Date and time with timezone.
    DateTime(DateTime<Utc>),
    /// Monetary value.
    Money(Money),
    /// Array-of-string tags (skills, categories).
    Tags(TagSet),
    /// Fallback for unrecognized JSON values.
    Json(serde_json::Value),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Long(_) => "long",
            Value::Float(_) => "float",
            Value::Decimal(_) => "decimal",
            Value::String(_) => "string",
            Value::Guid(_) => "guid",
            Value::DateTime(_) => "datetime",
            Value::Money(_) => "money",
            Value::Tags(_) => "tags",
            Value::Json(_) => "json",
        }
    }

    /// Returns the text this value contributes to substring search, or
    /// `None` for values that have no searchable text form.
    ///
    /// Strings search as themselves, tag sets as their space-joined tags.
    /// Numeric, date, and other values are not searchable; a substring
    /// criterion against them is a non-match.
    pub fn as_search_text(&self) -> Option<String> {
        match self {
            Value::String(s) => Some(s.clone()),
            Value::Tags(tags) => Some(tags.joined()),
            _ => None,
        }
    }

    /// Returns this value as a decimal if it is numeric.
    ///
    /// Int, Long, Decimal, and Money widen losslessly; Float goes through
    /// `Decimal::from_f64_retain` and yields `None` for non-finite values.
    pub fn as_numeric(&self) -> Option<Decimal> {
        match self {
            Value::Int(n) => Some(Decimal::from(*n)),
            Value::Long(n) => Some(Decimal::from(*n)),
            Value::Decimal(d) => Some(*d),
            Value::Money(m) => Some(m.value()),
            Value::Float(f) => Decimal::from_f64_retain(*f),
            _ => None,
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Long(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Value::Decimal(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<Uuid> for Value {
    fn from(v: Uuid) -> Self {
        Value::Guid(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl From<Money> for Value {
    fn from(v: Money) -> Self {
        Value::Money(v)
    }
}

impl From<TagSet> for Value {
    fn from(v: TagSet) -> Self {
        Value::Tags(v)
    }
}

impl From<Vec<String>> for Value {
    fn from(v: Vec<String>) -> Self {
        Value::Tags(TagSet::from(v))
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::Json(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_text() {
        assert_eq!(
            Value::from("Maria").as_search_text().as_deref(),
            Some("Maria")
        );
        assert_eq!(
            Value::from(vec!["React".to_string(), "Go".to_string()])
                .as_search_text()
                .as_deref(),
            Some("React Go")
        );
        assert_eq!(Value::from(42i32).as_search_text(), None);
        assert_eq!(Value::Null.as_search_text(), None);
    }

    #[test]
    fn test_numeric_widening() {
        assert_eq!(Value::from(5i32).as_numeric(), Some(Decimal::from(5)));
        assert_eq!(Value::from(5i64).as_numeric(), Some(Decimal::from(5)));
        assert_eq!(
            Value::from(Money::from_int(5)).as_numeric(),
            Some(Decimal::from(5))
        );
        assert_eq!(Value::from("5").as_numeric(), None);
        assert_eq!(Value::from(f64::NAN).as_numeric(), None);
    }
}
