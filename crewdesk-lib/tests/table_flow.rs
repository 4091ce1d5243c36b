//! End-to-end table flow: store -> view -> filter/sort/select -> tab switch

use crewdesk_lib::model::EntityKind;
use crewdesk_lib::model::Record;
use crewdesk_lib::query::Criterion;
use crewdesk_lib::store::DataStore;
use crewdesk_lib::store::InMemoryStore;
use crewdesk_lib::table::TableView;

fn names(records: &[Record]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.get_string("name").unwrap().unwrap().to_string())
        .collect()
}

#[test]
fn candidate_tab_filter_sort_select_cycle() {
    let store = InMemoryStore::seeded();
    let mut view = TableView::new(
        EntityKind::Candidate,
        store.load(EntityKind::Candidate).unwrap(),
    );

    // Narrow by status, then by a skill chip.
    view.set_criterion("status", Criterion::exact("status", "Available"));
    view.set_criterion("skills", Criterion::any_tag("skills", ["React"]));
    let rows = view.rows();
    assert!(!rows.is_empty());
    assert!(rows.len() < view.source().len());
    for row in &rows {
        assert_eq!(row.get_string("status").unwrap(), Some("Available"));
        assert!(row.get_tags("skills").unwrap().unwrap().contains("react"));
    }

    // Sort by name, select everything visible, run the "bulk action".
    view.sort_by("name");
    let mut expected = names(&view.rows());
    let mut sorted = expected.clone();
    sorted.sort_by_key(|n| n.to_lowercase());
    assert_eq!(expected, sorted);

    view.toggle_all();
    assert_eq!(view.selection().len(), view.rows().len());
    view.clear_selection();
    assert!(view.selection().is_empty());

    // Descending is the ascending view reversed.
    view.sort_by("name");
    expected.reverse();
    assert_eq!(names(&view.rows()), expected);
}

#[test]
fn search_box_reaches_roles_and_skills() {
    let store = InMemoryStore::seeded();
    let mut view = TableView::new(
        EntityKind::Candidate,
        store.load(EntityKind::Candidate).unwrap(),
    );
    let fallback = ["name", "role", "skills"];

    // Matches a role even though no candidate is named "engineer".
    view.set_criterion("search", Criterion::search("engineer", fallback));
    assert!(!view.rows().is_empty());

    // Matches a skill.
    view.set_criterion("search", Criterion::search("terraform", fallback));
    assert_eq!(view.rows().len(), 1);

    // Clearing the box removes the filter entirely.
    view.set_criterion("search", Criterion::search("", fallback));
    assert_eq!(view.rows().len(), view.source().len());
}

#[test]
fn tab_switch_discards_all_per_tab_state() {
    let store = InMemoryStore::seeded();
    let mut view = TableView::new(
        EntityKind::Candidate,
        store.load(EntityKind::Candidate).unwrap(),
    );
    view.set_criterion("status", Criterion::exact("status", "Available"));
    view.sort_by("name");
    view.toggle_all();
    assert!(!view.selection().is_empty());
    let candidate_ids = view.visible_ids();

    view.switch_entity(EntityKind::Client, store.load(EntityKind::Client).unwrap());
    assert!(view.selection().is_empty());
    assert!(view.sort().is_none());
    assert_eq!(view.rows().len(), view.source().len());
    // No stale candidate id can appear in the client tab.
    for id in candidate_ids {
        assert!(view.source().iter().all(|r| r.id() != id));
    }
}

#[test]
fn transaction_tab_sorts_amounts_numerically() {
    let store = InMemoryStore::seeded();
    let mut view = TableView::new(
        EntityKind::Transaction,
        store.load(EntityKind::Transaction).unwrap(),
    );
    view.sort_by("amount");
    let amounts: Vec<_> = view
        .rows()
        .iter()
        .map(|r| r.get_money("amount").unwrap().unwrap())
        .collect();
    assert!(amounts.windows(2).all(|w| w[0] <= w[1]));
}
