//! Filter-sort engine: the displayed list is always recomputed from the full
//! source list, never patched.

use std::cmp::Ordering;

use shared::domain::{Provider, SortKey};

use crate::criteria::Criteria;

/// Positions into `providers`, in display order.
///
/// Filtering keeps source order; sorting is stable, so equal keys stay in
/// source order too.
pub fn derive_indices(providers: &[Provider], criteria: &Criteria) -> Vec<usize> {
    let mut selected: Vec<usize> = providers
        .iter()
        .enumerate()
        .filter(|(_, provider)| {
            criteria
                .mode
                .map_or(true, |mode| mode.admits(provider.supports_remote_consult))
        })
        .filter(|(_, provider)| {
            criteria.specialties.is_empty() || provider.has_any_speciality(&criteria.specialties)
        })
        .map(|(index, _)| index)
        .collect();

    match criteria.sort_key {
        Some(SortKey::Fees) => {
            selected.sort_by(|&a, &b| {
                // `-0.0` and `0.0` are the same fee and must keep source order.
                providers[a]
                    .fees
                    .partial_cmp(&providers[b].fees)
                    .unwrap_or(Ordering::Equal)
            })
        }
        Some(SortKey::Experience) => {
            selected.sort_by(|&a, &b| providers[b].experience.cmp(&providers[a].experience))
        }
        None => {}
    }

    selected
}

pub fn derive<'a>(providers: &'a [Provider], criteria: &Criteria) -> Vec<&'a Provider> {
    derive_indices(providers, criteria)
        .into_iter()
        .map(|index| &providers[index])
        .collect()
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;
