//! View model for the filter controls.

use std::collections::BTreeSet;

use serde::Serialize;
use shared::domain::{ConsultMode, Provider, SortKey};

use crate::criteria::{Criteria, FilterAction};

/// Every speciality offered by at least one provider, sorted.
pub fn specialty_catalog(providers: &[Provider]) -> Vec<String> {
    providers
        .iter()
        .flat_map(|provider| provider.speciality.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn mode_label(mode: ConsultMode) -> &'static str {
    match mode {
        ConsultMode::Remote => "Video Consult",
        ConsultMode::InPerson => "In Clinic",
    }
}

pub fn mode_control_id(mode: ConsultMode) -> &'static str {
    match mode {
        ConsultMode::Remote => "filter-video-consult",
        ConsultMode::InPerson => "filter-in-clinic",
    }
}

pub fn sort_label(key: SortKey) -> &'static str {
    match key {
        SortKey::Fees => "Fees (Low to High)",
        SortKey::Experience => "Experience (High to Low)",
    }
}

pub fn sort_control_id(key: SortKey) -> &'static str {
    match key {
        SortKey::Fees => "sort-fees",
        SortKey::Experience => "sort-experience",
    }
}

/// Only the first `/` is rewritten, so `"A/B/C"` becomes
/// `filter-specialty-A-B/C`.
pub fn specialty_control_id(name: &str) -> String {
    format!("filter-specialty-{}", name.replacen('/', "-", 1))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelOption {
    pub label: String,
    pub control_id: String,
    pub checked: bool,
    /// Dispatch this when the control is clicked.
    pub action: FilterAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelSection {
    pub title: &'static str,
    pub header_id: &'static str,
    pub options: Vec<PanelOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterPanel {
    pub consultation_mode: PanelSection,
    pub speciality: PanelSection,
    pub sort_by: PanelSection,
}

impl FilterPanel {
    pub fn build(catalog: &[String], criteria: &Criteria) -> Self {
        let consultation_mode = PanelSection {
            title: "Consultation Mode",
            header_id: "filter-header-moc",
            options: ConsultMode::ALL
                .into_iter()
                .map(|mode| PanelOption {
                    label: mode_label(mode).to_string(),
                    control_id: mode_control_id(mode).to_string(),
                    checked: criteria.mode == Some(mode),
                    action: FilterAction::ToggleMode(mode),
                })
                .collect(),
        };

        let speciality = PanelSection {
            title: "Speciality",
            header_id: "filter-header-speciality",
            options: catalog
                .iter()
                .map(|name| PanelOption {
                    label: name.clone(),
                    control_id: specialty_control_id(name),
                    checked: criteria.specialties.contains(name),
                    action: FilterAction::ToggleSpecialty(name.clone()),
                })
                .collect(),
        };

        let sort_by = PanelSection {
            title: "Sort By",
            header_id: "filter-header-sort",
            options: SortKey::ALL
                .into_iter()
                .map(|key| PanelOption {
                    label: sort_label(key).to_string(),
                    control_id: sort_control_id(key).to_string(),
                    checked: criteria.sort_key == Some(key),
                    action: FilterAction::ToggleSort(key),
                })
                .collect(),
        };

        Self {
            consultation_mode,
            speciality,
            sort_by,
        }
    }

    pub fn sections(&self) -> [&PanelSection; 3] {
        [&self.consultation_mode, &self.speciality, &self.sort_by]
    }
}

#[cfg(test)]
#[path = "tests/panel_tests.rs"]
mod tests;
