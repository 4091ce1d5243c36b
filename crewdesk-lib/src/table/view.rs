//! Derived table view: one entity tab's filter/sort/selection state

use std::collections::BTreeMap;

use log::debug;
use uuid::Uuid;

use super::Selection;
use crate::model::EntityKind;
use crate::model::Record;
use crate::query::Criterion;
use crate::query::SortSpec;
use crate::query::apply_filters;
use crate::query::sort_records;

/// The filter, sort, and selection state of one entity tab.
///
/// A `TableView` owns a read-only source collection for one
/// [`EntityKind`] plus everything the user has dialed in on top of it:
/// keyed filter criteria, an optional sort spec, and the row selection.
/// [`TableView::rows`] recomputes the derived, ordered, filtered view
/// from scratch on every call; at tens to low hundreds of records this
/// is cheaper than caching and keeps the view a pure function of its
/// inputs.
///
/// Criteria are keyed by the control that owns them (for example
/// `"search"` or `"status"`), so re-typing in the same input replaces
/// the previous criterion instead of stacking a new one.
///
/// # Example
///
/// ```
/// use crewdesk_lib::model::{EntityKind, Record};
/// use crewdesk_lib::query::Criterion;
/// use crewdesk_lib::table::TableView;
///
/// let source = vec![
///     Record::new(EntityKind::Candidate).set("name", "Alex").set("status", "Available"),
///     Record::new(EntityKind::Candidate).set("name", "Maria").set("status", "Placed"),
/// ];
/// let mut view = TableView::new(EntityKind::Candidate, source);
/// view.set_criterion("status", Criterion::exact("status", "Available"));
/// assert_eq!(view.rows().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct TableView {
    kind: EntityKind,
    source: Vec<Record>,
    criteria: BTreeMap<String, Criterion>,
    sort: Option<SortSpec>,
    selection: Selection,
}

impl TableView {
    /// Creates an idle view over a source collection: no criteria, no
    /// sort, nothing selected.
    pub fn new(kind: EntityKind, source: Vec<Record>) -> Self {
        Self {
            kind,
            source,
            criteria: BTreeMap::new(),
            sort: None,
            selection: Selection::new(),
        }
    }

    /// Returns the entity kind this view is showing.
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Returns the unfiltered source collection.
    pub fn source(&self) -> &[Record] {
        &self.source
    }

    /// Returns the current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Returns the active sort spec, if any.
    pub fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    /// Returns the active criteria in key order.
    pub fn criteria(&self) -> impl Iterator<Item = (&str, &Criterion)> {
        self.criteria.iter().map(|(k, c)| (k.as_str(), c))
    }

    // =========================================================================
    // Derived view
    // =========================================================================

    /// Recomputes the ordered, filtered view.
    ///
    /// Filtering runs first, then the stable sort; the result is always a
    /// subset of the source with order determined solely by the sort spec.
    pub fn rows(&self) -> Vec<Record> {
        let criteria: Vec<Criterion> = self.criteria.values().cloned().collect();
        let filtered = apply_filters(&self.source, &criteria);
        debug!(
            "view[{}]: {} of {} records pass {} criteria",
            self.kind,
            filtered.len(),
            self.source.len(),
            criteria.len(),
        );
        match &self.sort {
            Some(spec) => sort_records(&filtered, spec),
            None => filtered,
        }
    }

    /// Returns the ids of the currently visible rows, in view order.
    pub fn visible_ids(&self) -> Vec<Uuid> {
        self.rows().iter().map(Record::id).collect()
    }

    // =========================================================================
    // Filter events
    // =========================================================================

    /// Sets or replaces the criterion owned by `key`.
    ///
    /// An empty criterion clears the key instead of storing a no-op, so
    /// clearing a search box genuinely removes its filter.
    pub fn set_criterion(&mut self, key: impl Into<String>, criterion: Criterion) {
        let key = key.into();
        if criterion.is_empty() {
            self.criteria.remove(&key);
        } else {
            self.criteria.insert(key, criterion);
        }
    }

    /// Removes the criterion owned by `key`, if any.
    pub fn remove_criterion(&mut self, key: &str) {
        self.criteria.remove(key);
    }

    /// Removes every criterion.
    pub fn clear_criteria(&mut self) {
        self.criteria.clear();
    }

    // =========================================================================
    // Sort events
    // =========================================================================

    /// Applies a column-header click: sorts ascending by a new field, or
    /// flips the direction when the sorted column is clicked again.
    pub fn sort_by(&mut self, field: impl Into<String>) {
        let field = field.into();
        self.sort = Some(match self.sort.take() {
            Some(spec) => spec.toggle(field),
            None => SortSpec::asc(field),
        });
    }

    /// Clears the sort, restoring source order.
    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    // =========================================================================
    // Selection events
    // =========================================================================

    /// Toggles one row's membership in the selection.
    pub fn toggle_row(&mut self, id: Uuid) {
        self.selection = self.selection.toggle(id);
    }

    /// Applies the header checkbox: selects every visible row, or clears
    /// the selection when every visible row was already selected.
    pub fn toggle_all(&mut self) {
        self.selection = self.selection.select_all(self.visible_ids());
    }

    /// Clears the selection. Invoked after a bulk action completes.
    pub fn clear_selection(&mut self) {
        self.selection = self.selection.clear();
    }

    // =========================================================================
    // Tab switch
    // =========================================================================

    /// Switches this view to another entity tab.
    ///
    /// The new tab starts idle: criteria, sort, and selection are all
    /// reset. Selection is never carried across entity kinds.
    pub fn switch_entity(&mut self, kind: EntityKind, source: Vec<Record>) {
        debug!("view: switching {} -> {}", self.kind, kind);
        self.kind = kind;
        self.source = source;
        self.criteria.clear();
        self.sort = None;
        self.selection = Selection::new();
    }

    /// Replaces the source collection in place (a reload of the same
    /// tab). Filters and sort survive; the selection is pruned to ids
    /// still present so it never references a departed record.
    pub fn replace_source(&mut self, source: Vec<Record>) {
        self.source = source;
        self.selection = self
            .selection
            .retain_within(self.source.iter().map(Record::id));
    }
}
