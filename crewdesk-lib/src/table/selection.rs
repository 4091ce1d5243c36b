//! Multi-row selection set

use std::collections::BTreeSet;

use uuid::Uuid;

/// The set of record ids currently marked for a bulk action.
///
/// All mutating operations are pure: they return a new `Selection` and
/// leave the receiver untouched, so a caller can hold the previous state
/// and the next state side by side. Backed by a `BTreeSet` so iteration
/// order is deterministic.
///
/// # Example
///
/// ```
/// use crewdesk_lib::table::Selection;
/// use uuid::Uuid;
///
/// let id = Uuid::new_v4();
/// let selection = Selection::new().toggle(id);
/// assert!(selection.contains(id));
/// assert!(selection.toggle(id).is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    ids: BTreeSet<Uuid>,
}

impl Selection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the given id is selected.
    pub fn contains(&self, id: Uuid) -> bool {
        self.ids.contains(&id)
    }

    /// Returns the number of selected ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterates over the selected ids in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = Uuid> + '_ {
        self.ids.iter().copied()
    }

    /// Returns a new selection with the given id added if absent, or
    /// removed if present.
    pub fn toggle(&self, id: Uuid) -> Selection {
        let mut ids = self.ids.clone();
        if !ids.remove(&id) {
            ids.insert(id);
        }
        Selection { ids }
    }

    /// Returns a new selection covering every visible id, or an empty
    /// selection if every visible id was already selected.
    ///
    /// This toggle-off behavior is what lets a single header checkbox act
    /// as both select-all and clear-all.
    pub fn select_all(&self, visible: impl IntoIterator<Item = Uuid>) -> Selection {
        let all: BTreeSet<Uuid> = visible.into_iter().collect();
        if self.ids == all {
            Selection::new()
        } else {
            Selection { ids: all }
        }
    }

    /// Returns an empty selection.
    pub fn clear(&self) -> Selection {
        Selection::new()
    }

    /// Returns a new selection keeping only ids present in `keep`.
    ///
    /// Applied whenever the source collection changes, so stale ids from
    /// a previous collection never survive.
    pub fn retain_within(&self, keep: impl IntoIterator<Item = Uuid>) -> Selection {
        let keep: BTreeSet<Uuid> = keep.into_iter().collect();
        Selection {
            ids: self.ids.intersection(&keep).copied().collect(),
        }
    }
}

impl FromIterator<Uuid> for Selection {
    fn from_iter<I: IntoIterator<Item = Uuid>>(iter: I) -> Self {
        Selection {
            ids: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: usize) -> Vec<Uuid> {
        (0..n).map(|_| Uuid::new_v4()).collect()
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let [a] = [Uuid::new_v4()];
        let one = Selection::new().toggle(a);
        assert!(one.contains(a));
        let none = one.toggle(a);
        assert!(none.is_empty());
        // The intermediate state is untouched.
        assert!(one.contains(a));
    }

    #[test]
    fn test_toggle_differs_by_exactly_one_id() {
        let visible = ids(3);
        let selection: Selection = visible.iter().copied().collect();
        let toggled = selection.toggle(visible[1]);
        assert_eq!(toggled.len(), selection.len() - 1);
        assert!(!toggled.contains(visible[1]));
        assert!(toggled.contains(visible[0]));
        assert!(toggled.contains(visible[2]));
    }

    #[test]
    fn test_select_all_from_empty_then_toggles_off() {
        let visible = ids(3);
        let all = Selection::new().select_all(visible.iter().copied());
        assert_eq!(all.len(), 3);
        let cleared = all.select_all(visible.iter().copied());
        assert!(cleared.is_empty());
    }

    #[test]
    fn test_select_all_from_partial_selects_everything() {
        let visible = ids(3);
        let partial = Selection::new().toggle(visible[0]);
        let all = partial.select_all(visible.iter().copied());
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_select_all_twice_round_trips() {
        let visible = ids(4);
        let partial = Selection::new().toggle(visible[2]);
        // From empty: empty -> all -> empty.
        let start = Selection::new();
        let twice = start
            .select_all(visible.iter().copied())
            .select_all(visible.iter().copied());
        assert_eq!(twice, start);
        // From partial: partial -> all -> empty -> all; the documented
        // round trip applies to the empty/all cycle.
        assert_eq!(partial.select_all(visible.iter().copied()).len(), 4);
    }

    #[test]
    fn test_retain_within_drops_stale_ids() {
        let old = ids(2);
        let fresh = ids(2);
        let selection: Selection = old.iter().chain(fresh.iter()).copied().collect();
        let pruned = selection.retain_within(fresh.iter().copied());
        assert_eq!(pruned.len(), 2);
        assert!(old.iter().all(|id| !pruned.contains(*id)));
    }
}
