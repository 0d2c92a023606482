//! Controller tying the criteria store, the engine, and the location together.

use shared::domain::{ConsultMode, Provider, SortKey};
use tracing::debug;

use crate::{
    criteria::{Criteria, CriteriaStore, FilterAction},
    engine,
    panel::{specialty_catalog, FilterPanel},
    sync::{self, Location},
};

/// One page session over a fixed provider list.
///
/// Each toggle updates the criteria, the derived view, and the location
/// query inside a single `&mut self` call, so callers only ever observe the
/// three in agreement.
pub struct FilterSession<L: Location> {
    providers: Vec<Provider>,
    catalog: Vec<String>,
    store: CriteriaStore,
    view: Vec<usize>,
    location: L,
}

impl<L: Location> FilterSession<L> {
    /// Seeds criteria from the location's current query, then writes the
    /// normalized query back so stale or unknown values are dropped.
    pub fn open(providers: Vec<Provider>, location: L) -> Self {
        let criteria = sync::decode(&location.query());
        debug!(
            mode = ?criteria.mode,
            specialties = criteria.specialties.len(),
            sort_key = ?criteria.sort_key,
            "seeded filter criteria from location"
        );

        let catalog = specialty_catalog(&providers);
        let mut session = Self {
            providers,
            catalog,
            store: CriteriaStore::seeded(criteria),
            view: Vec::new(),
            location,
        };
        session.refresh();
        session
    }

    pub fn toggle_mode(&mut self, mode: ConsultMode) {
        self.apply(FilterAction::ToggleMode(mode));
    }

    pub fn toggle_specialty(&mut self, name: &str) {
        self.apply(FilterAction::ToggleSpecialty(name.to_string()));
    }

    pub fn toggle_sort(&mut self, key: SortKey) {
        self.apply(FilterAction::ToggleSort(key));
    }

    pub fn apply(&mut self, action: FilterAction) {
        self.store.apply(&action);
        self.refresh();
        debug!(?action, shown = self.view.len(), "applied filter action");
    }

    fn refresh(&mut self) {
        let criteria = self.store.criteria();
        self.view = engine::derive_indices(&self.providers, criteria);
        let next = sync::encode(criteria, &self.location.query());
        self.location.replace_query(next);
    }

    pub fn criteria(&self) -> &Criteria {
        self.store.criteria()
    }

    /// The derived list, in display order.
    pub fn view(&self) -> impl ExactSizeIterator<Item = &Provider> + '_ {
        self.view.iter().map(|&index| &self.providers[index])
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn specialty_catalog(&self) -> &[String] {
        &self.catalog
    }

    pub fn panel(&self) -> FilterPanel {
        FilterPanel::build(&self.catalog, self.store.criteria())
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    pub fn into_location(self) -> L {
        self.location
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
