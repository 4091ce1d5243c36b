//! Sort specs and stable in-memory ordering.

use chrono::DateTime;
use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::model::Record;
use crate::model::Value;

/// Sort direction for ordering a filtered record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9, oldest first).
    Asc,
    /// Descending order (Z-A, 9-0, newest first).
    Desc,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn flipped(&self) -> Direction {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }
}

/// The field and direction governing the ordering of a record set.
///
/// A table has at most one active sort spec. Clicking a column header
/// calls [`SortSpec::toggle`]: a repeat click on the sorted column flips
/// the direction, a click on a different column sorts ascending by it.
///
/// # Example
///
/// ```
/// use crewdesk_lib::query::{Direction, SortSpec};
///
/// let spec = SortSpec::asc("name");
/// let spec = spec.toggle("name");
/// assert_eq!(spec.direction, Direction::Desc);
/// let spec = spec.toggle("added_on");
/// assert_eq!((spec.field.as_str(), spec.direction), ("added_on", Direction::Asc));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SortSpec {
    /// The field to sort by.
    pub field: String,
    /// The sort direction.
    pub direction: Direction,
}

impl SortSpec {
    /// Creates an ascending sort on a field.
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Asc,
        }
    }

    /// Creates a descending sort on a field.
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Desc,
        }
    }

    /// Applies a column-header click to this spec.
    pub fn toggle(self, field: impl Into<String>) -> Self {
        let field = field.into();
        if self.field == field {
            Self {
                field,
                direction: self.direction.flipped(),
            }
        } else {
            Self::asc(field)
        }
    }
}

/// Sorts records by the spec's field, stably.
///
/// Each record is reduced to a [`SortKey`] for the field, and the keys
/// form a total order: numeric values (as decimals across
/// Int/Long/Float/Decimal/Money) sort first, then strings
/// (case-insensitive lowercase normalization, byte order, not full
/// Unicode collation), then dates chronologically, then bools, then
/// guids; values with no defined order (nulls, tags, json) follow all
/// comparable ones, and records missing the field sort last of all in
/// ascending direction. Descending flips the whole comparator. Records
/// with equal keys keep their relative input order.
///
/// Returns a new vector; the input is never mutated.
pub fn sort_records(records: &[Record], spec: &SortSpec) -> Vec<Record> {
    let mut sorted: Vec<Record> = records.to_vec();
    // Vec::sort_by is stable, which keeps equal-key rows in input order.
    sorted.sort_by(|a, b| {
        let ordering = sort_key(a, &spec.field).cmp(&sort_key(b, &spec.field));
        match spec.direction {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    });
    sorted
}

/// One record's comparison key for one field.
///
/// Variant declaration order is the ascending class order, so the
/// derived `Ord` compares classes first and values within a class
/// second. This keeps the comparator a total order even over columns
/// holding mixed value shapes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Numeric(Decimal),
    Text(String),
    Time(DateTime<Utc>),
    Flag(bool),
    Id(Uuid),
    /// Value present but with no defined order (null, tags, json).
    Unordered,
    /// Field absent from the record.
    Missing,
}

fn sort_key(record: &Record, field: &str) -> SortKey {
    let Some(value) = record.get(field) else {
        return SortKey::Missing;
    };
    if let Some(n) = value.as_numeric() {
        return SortKey::Numeric(n);
    }
    match value {
        Value::String(s) => SortKey::Text(s.to_lowercase()),
        Value::DateTime(dt) => SortKey::Time(*dt),
        Value::Bool(b) => SortKey::Flag(*b),
        Value::Guid(g) => SortKey::Id(*g),
        _ => SortKey::Unordered,
    }
}
