//! Text and JSON output for a filter session.

use std::fmt::Write as _;

use listing_core::{Criteria, FilterPanel, FilterSession, UrlLocation};
use serde::Serialize;
use shared::domain::Provider;

#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub url: &'a str,
    pub criteria: &'a Criteria,
    pub providers: Vec<&'a Provider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panel: Option<FilterPanel>,
}

impl<'a> Snapshot<'a> {
    pub fn capture(session: &'a FilterSession<UrlLocation>, with_panel: bool) -> Self {
        Self {
            url: session.location().as_str(),
            criteria: session.criteria(),
            providers: session.view().collect(),
            panel: with_panel.then(|| session.panel()),
        }
    }
}

pub fn provider_line(provider: &Provider) -> String {
    let consult = if provider.supports_remote_consult {
        "Video Consult Available"
    } else {
        "In-Clinic Only"
    };
    format!(
        "{} | {} | {} years experience | ₹{} | {}",
        provider.name,
        provider.speciality.join(", "),
        provider.experience,
        provider.fees,
        consult
    )
}

pub fn panel_text(panel: &FilterPanel) -> String {
    let mut out = String::new();
    for section in panel.sections() {
        let _ = writeln!(out, "{}", section.title);
        for option in &section.options {
            let mark = if option.checked { 'x' } else { ' ' };
            let _ = writeln!(out, "  [{mark}] {}", option.label);
        }
    }
    out
}

pub fn text(session: &FilterSession<UrlLocation>, with_panel: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", session.location().as_str());
    if with_panel {
        out.push_str(&panel_text(&session.panel()));
    }
    let _ = writeln!(
        out,
        "{} of {} providers",
        session.view().len(),
        session.providers().len()
    );
    for provider in session.view() {
        let _ = writeln!(out, "{}", provider_line(provider));
    }
    out
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
