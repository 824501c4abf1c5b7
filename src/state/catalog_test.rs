use super::*;
use crate::net::api::CatalogError;
use crate::net::types::Rating;

fn item(id: &str, category: &str, count: i64) -> CatalogItem {
    CatalogItem {
        id: id.to_owned(),
        title: format!("Item {id}"),
        image: format!("https://example.test/{id}.jpg"),
        price: 10.0,
        category: category.to_owned(),
        description: String::new(),
        variants: Vec::new(),
        rating: Some(Rating { rate: 4.0, count }),
    }
}

fn six_items() -> Vec<CatalogItem> {
    vec![
        item("1", "electronics", 3),
        item("2", "jewelery", 1),
        item("3", "electronics", 0),
        item("4", "men's clothing", 8),
        item("5", "jewelery", 2),
        item("6", "electronics", 9),
    ]
}

fn loaded() -> CatalogState {
    let mut state = CatalogState::default();
    state.begin_loading();
    state.finish_loading(six_items());
    state
}

fn ids(items: &[CatalogItem]) -> Vec<&str> {
    items.iter().map(|i| i.id.as_str()).collect()
}

// =============================================================
// Loading lifecycle
// =============================================================

#[test]
fn catalog_state_defaults() {
    let state = CatalogState::default();
    assert!(state.items.is_empty());
    assert!(state.filtered.is_empty());
    assert_eq!(state.filter, CategoryFilter::All);
    assert!(!state.loading);
}

#[test]
fn finish_loading_sets_full_and_filtered_lists() {
    let state = loaded();
    assert!(!state.loading);
    assert_eq!(state.items.len(), 6);
    assert_eq!(state.filtered, state.items);
}

#[test]
fn failed_outcome_leaves_list_empty() {
    let mut state = CatalogState::default();
    state.begin_loading();
    assert!(state.apply_outcome(FetchOutcome::Failed(CatalogError::Status { status: 500 })));
    assert!(!state.loading);
    assert!(state.items.is_empty());
    assert!(state.filtered.is_empty());
}

#[test]
fn cancelled_outcome_does_not_touch_state() {
    let mut state = CatalogState::default();
    state.begin_loading();
    assert!(!state.apply_outcome(FetchOutcome::Cancelled));
    assert!(state.loading);
    assert!(state.items.is_empty());
}

#[test]
fn abandoned_reload_clears_flag_and_keeps_previous_list() {
    let mut state = loaded();
    state.apply_filter(CategoryFilter::category("electronics"));
    let filtered = state.filtered.clone();
    state.begin_loading();
    state.abandon_loading();
    assert!(!state.loading);
    assert_eq!(state.items.len(), 6);
    assert_eq!(state.filtered, filtered);
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn electronics_then_all_scenario() {
    let mut state = loaded();

    state.apply_filter(CategoryFilter::category("electronics"));
    assert_eq!(state.filtered.len(), 3);
    assert_eq!(ids(&state.filtered), vec!["1", "3", "6"]);
    assert!(state.filtered.iter().all(|i| i.category == "electronics"));

    state.apply_filter(CategoryFilter::All);
    assert_eq!(state.filtered.len(), 6);
    assert_eq!(state.filtered, six_items());
}

#[test]
fn filters_are_not_cumulative() {
    let mut state = loaded();
    state.apply_filter(CategoryFilter::category("electronics"));
    state.apply_filter(CategoryFilter::category("jewelery"));
    assert_eq!(ids(&state.filtered), vec!["2", "5"]);
}

#[test]
fn reapplying_a_filter_is_idempotent() {
    let mut state = loaded();
    state.apply_filter(CategoryFilter::category("jewelery"));
    let first = state.filtered.clone();
    state.apply_filter(CategoryFilter::category("jewelery"));
    assert_eq!(state.filtered, first);
}

#[test]
fn every_category_yields_matching_subset() {
    let mut state = loaded();
    for category in ["electronics", "jewelery", "men's clothing"] {
        state.apply_filter(CategoryFilter::category(category));
        let expected: Vec<_> = state.items.iter().filter(|i| i.category == category).cloned().collect();
        assert_eq!(state.filtered, expected);
        assert!(state.filtered.iter().all(|i| state.items.contains(i)));
    }
}

#[test]
fn category_match_is_case_sensitive() {
    let mut state = loaded();
    state.apply_filter(CategoryFilter::category("Electronics"));
    assert!(state.filtered.is_empty());
    assert_eq!(state.items.len(), 6);
}

#[test]
fn filtering_does_not_mutate_full_list() {
    let mut state = loaded();
    state.apply_filter(CategoryFilter::category("men's clothing"));
    assert_eq!(state.items, six_items());
}

#[test]
fn new_load_resets_filter_to_all() {
    let mut state = loaded();
    state.apply_filter(CategoryFilter::category("jewelery"));
    state.finish_loading(six_items());
    assert_eq!(state.filter, CategoryFilter::All);
    assert_eq!(state.filtered.len(), 6);
}

// =============================================================
// Lookup + duplicate detection
// =============================================================

#[test]
fn find_looks_up_by_id() {
    let state = loaded();
    assert_eq!(state.find("4").map(|i| i.category.as_str()), Some("men's clothing"));
    assert!(state.find("404").is_none());
}

#[test]
fn duplicate_ids_reports_each_repeat_once() {
    let items = vec![item("1", "a", 1), item("2", "a", 1), item("1", "b", 1), item("1", "c", 1), item("2", "d", 1)];
    assert_eq!(duplicate_ids(&items), vec!["1".to_owned(), "2".to_owned()]);
    assert!(duplicate_ids(&six_items()).is_empty());
}
