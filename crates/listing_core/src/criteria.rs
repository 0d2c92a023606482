use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use shared::domain::{ConsultMode, SortKey};

/// The user's current filter selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criteria {
    pub mode: Option<ConsultMode>,
    pub specialties: BTreeSet<String>,
    pub sort_key: Option<SortKey>,
}

impl Criteria {
    /// No filter and no ordering applied.
    pub fn is_neutral(&self) -> bool {
        self.mode.is_none() && self.specialties.is_empty() && self.sort_key.is_none()
    }
}

/// One user edit. Every state change goes through one of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum FilterAction {
    ToggleMode(ConsultMode),
    ToggleSpecialty(String),
    ToggleSort(SortKey),
}

/// Holds the criteria for one page session. Only toggles mutate it.
#[derive(Debug, Clone, Default)]
pub struct CriteriaStore {
    criteria: Criteria,
}

impl CriteriaStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(criteria: Criteria) -> Self {
        Self { criteria }
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    pub fn toggle_mode(&mut self, selected: ConsultMode) {
        toggle_exclusive(&mut self.criteria.mode, selected);
    }

    pub fn toggle_specialty(&mut self, name: &str) {
        if !self.criteria.specialties.remove(name) {
            self.criteria.specialties.insert(name.to_string());
        }
    }

    pub fn toggle_sort(&mut self, key: SortKey) {
        toggle_exclusive(&mut self.criteria.sort_key, key);
    }

    pub fn apply(&mut self, action: &FilterAction) {
        match action {
            FilterAction::ToggleMode(mode) => self.toggle_mode(*mode),
            FilterAction::ToggleSpecialty(name) => self.toggle_specialty(name),
            FilterAction::ToggleSort(key) => self.toggle_sort(*key),
        }
    }
}

// Selecting the active variant clears the slot; anything else replaces it.
fn toggle_exclusive<T: PartialEq>(slot: &mut Option<T>, selected: T) {
    if slot.as_ref() == Some(&selected) {
        *slot = None;
    } else {
        *slot = Some(selected);
    }
}

#[cfg(test)]
#[path = "tests/criteria_tests.rs"]
mod tests;
