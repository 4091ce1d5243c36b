//! Tag set type

use serde::Deserialize;
use serde::Serialize;

/// An ordered list of string tags on a record.
///
/// Used for array-valued fields such as candidate skills or client
/// categories. Tag matching is case-insensitive throughout, because the
/// same skill arrives in mixed casings ("react", "React") from different
/// intake forms.
///
/// # Example
///
/// ```
/// use crewdesk_lib::model::types::TagSet;
///
/// let skills = TagSet::new(["React", "Node.js"]);
/// assert!(skills.contains("react"));
/// assert!(skills.intersects(&["React".to_string(), "Go".to_string()]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet {
    tags: Vec<String>,
}

impl TagSet {
    /// Creates a new tag set from an iterator of tags.
    pub fn new<I, T>(tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the tags in insertion order.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns `true` if no tags are present.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Returns the number of tags.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns `true` if the given tag is present (case-insensitive).
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Returns `true` if at least one of this set's tags appears in
    /// `targets` (case-insensitive).
    pub fn intersects(&self, targets: &[String]) -> bool {
        self.tags
            .iter()
            .any(|t| targets.iter().any(|target| t.eq_ignore_ascii_case(target)))
    }

    /// Returns the tags joined with a single space, for substring search.
    pub fn joined(&self) -> String {
        self.tags.join(" ")
    }
}

impl From<Vec<String>> for TagSet {
    fn from(tags: Vec<String>) -> Self {
        Self { tags }
    }
}

impl From<TagSet> for Vec<String> {
    fn from(set: TagSet) -> Self {
        set.tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_ignores_case() {
        let set = TagSet::new(["React", "Node.js"]);
        assert!(set.contains("REACT"));
        assert!(set.contains("node.js"));
        assert!(!set.contains("Python"));
    }

    #[test]
    fn test_intersects() {
        let set = TagSet::new(["React", "Node.js"]);
        assert!(set.intersects(&["react".to_string()]));
        assert!(!set.intersects(&["Python".to_string(), "Go".to_string()]));
        assert!(!set.intersects(&[]));
    }
}
