//! Catalog listing state: fetched items, active category filter, loading flag.
//!
//! DESIGN
//! ======
//! The filtered view is always recomputed from the full list, never from a
//! previous filtered result, so filters are non-cumulative and reapplying
//! one is a no-op.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::HashSet;

use crate::net::fetch::FetchOutcome;
use crate::net::types::CatalogItem;

/// Active category filter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Sentinel: no filter, every item is shown.
    #[default]
    All,
    /// Exact, case-sensitive match against `CatalogItem::category`.
    Category(String),
}

impl CategoryFilter {
    pub fn category(label: impl Into<String>) -> Self {
        Self::Category(label.into())
    }

    pub fn matches(&self, item: &CatalogItem) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => item.category == *category,
        }
    }
}

/// Listing page state.
#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    pub items: Vec<CatalogItem>,
    pub filtered: Vec<CatalogItem>,
    pub filter: CategoryFilter,
    pub loading: bool,
}

impl CatalogState {
    pub fn begin_loading(&mut self) {
        self.loading = true;
    }

    /// Store a freshly fetched list and reset the view to show all of it.
    pub fn finish_loading(&mut self, items: Vec<CatalogItem>) {
        self.filtered.clone_from(&items);
        self.items = items;
        self.filter = CategoryFilter::All;
        self.loading = false;
    }

    /// A failed fetch leaves the list empty.
    pub fn fail_loading(&mut self) {
        self.items.clear();
        self.filtered.clear();
        self.loading = false;
    }

    /// Drop the loading flag after a fetch was cancelled; lists stay as
    /// they were.
    pub fn abandon_loading(&mut self) {
        self.loading = false;
    }

    /// Apply a fetch outcome. Returns `false` (and leaves state untouched)
    /// for a cancelled fetch.
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) -> bool {
        match outcome {
            FetchOutcome::Loaded(items) => {
                self.finish_loading(items);
                true
            }
            FetchOutcome::Failed(_) => {
                self.fail_loading();
                true
            }
            FetchOutcome::Cancelled => false,
        }
    }

    /// Recompute the filtered view from the full list.
    pub fn apply_filter(&mut self, filter: CategoryFilter) {
        self.filtered = self.items.iter().filter(|item| filter.matches(item)).cloned().collect();
        self.filter = filter;
    }

    pub fn find(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

/// Item ids that occur more than once, in first-repeat order.
pub fn duplicate_ids(items: &[CatalogItem]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut dupes = Vec::new();
    for item in items {
        if !seen.insert(item.id.as_str()) && !dupes.contains(&item.id) {
            dupes.push(item.id.clone());
        }
    }
    dupes
}
