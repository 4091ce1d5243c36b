//! Filter criteria evaluated against in-memory records.

use crate::model::Record;
use crate::model::Value;

/// A single filter predicate over one field of a record.
///
/// Criteria combine with logical AND: a record is kept only if it
/// satisfies every active criterion. An empty criterion (empty text,
/// empty tag list, null value) models "optional filter, not yet set" and
/// matches every record. A non-empty criterion referencing a field the
/// record does not carry is a non-match for that record, never an error.
///
/// # Example
///
/// ```
/// use crewdesk_lib::model::{EntityKind, Record};
/// use crewdesk_lib::query::Criterion;
///
/// let record = Record::new(EntityKind::Candidate)
///     .set("name", "Alex Thompson")
///     .set("status", "Available");
///
/// assert!(Criterion::exact("status", "Available").matches(&record));
/// assert!(Criterion::substring("name", "thomp").matches(&record));
/// assert!(!Criterion::exact("status", "Placed").matches(&record));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Criterion {
    /// Field equals the target value (dropdown filters: status, department).
    Exact { field: String, value: Value },
    /// Case-insensitive containment on one field (per-column text filter).
    Substring { field: String, text: String },
    /// Case-insensitive containment across a fallback field set (the
    /// toolbar search box); passes if ANY listed field contains the text.
    Search { text: String, fields: Vec<String> },
    /// At least one element of the record's tag-valued field is in the
    /// target list (skills/category chip filters).
    AnyTag { field: String, tags: Vec<String> },
}

impl Criterion {
    /// Creates an exact-match criterion: field equals value.
    pub fn exact(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Criterion::Exact {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Creates a case-insensitive substring criterion on one field.
    pub fn substring(field: impl Into<String>, text: impl Into<String>) -> Self {
        Criterion::Substring {
            field: field.into(),
            text: text.into(),
        }
    }

    /// Creates a general search criterion over a fallback field set.
    pub fn search<I, F>(text: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<String>,
    {
        Criterion::Search {
            text: text.into(),
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a tag-intersection criterion.
    pub fn any_tag<I, T>(field: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Criterion::AnyTag {
            field: field.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns `true` if this criterion is unset and matches everything.
    pub fn is_empty(&self) -> bool {
        match self {
            Criterion::Exact { value, .. } => match value {
                Value::Null => true,
                Value::String(s) => s.is_empty(),
                _ => false,
            },
            Criterion::Substring { text, .. } => text.is_empty(),
            Criterion::Search { text, fields } => text.is_empty() || fields.is_empty(),
            Criterion::AnyTag { tags, .. } => tags.is_empty(),
        }
    }

    /// Evaluates this criterion against a record.
    pub fn matches(&self, record: &Record) -> bool {
        if self.is_empty() {
            return true;
        }
        match self {
            Criterion::Exact { field, value } => record.get(field) == Some(value),
            Criterion::Substring { field, text } => field_contains(record, field, text),
            Criterion::Search { text, fields } => {
                fields.iter().any(|field| field_contains(record, field, text))
            }
            Criterion::AnyTag { field, tags } => match record.get(field) {
                Some(Value::Tags(set)) => set.intersects(tags),
                // A plain string field behaves like a single-element tag set.
                Some(Value::String(s)) => tags.iter().any(|t| t.eq_ignore_ascii_case(s)),
                _ => false,
            },
        }
    }
}

/// Case-insensitive substring test on one field's searchable text.
///
/// Missing fields and fields with no text form (numbers, dates) are
/// non-matches.
fn field_contains(record: &Record, field: &str, text: &str) -> bool {
    record
        .get(field)
        .and_then(Value::as_search_text)
        .is_some_and(|haystack| haystack.to_lowercase().contains(&text.to_lowercase()))
}

/// Applies every criterion to the source collection with logical AND.
///
/// Returns a new vector preserving source order; the source is never
/// mutated. An empty criteria list passes everything through.
pub fn apply_filters(source: &[Record], criteria: &[Criterion]) -> Vec<Record> {
    source
        .iter()
        .filter(|record| criteria.iter().all(|criterion| criterion.matches(record)))
        .cloned()
        .collect()
}
