//! Query-parameter contract shared by every page that links into the directory.

use crate::domain::{ConsultMode, SortKey};

pub const CONSULT_TYPE_PARAM: &str = "consultType";
pub const SPECIALTY_PARAM: &str = "specialty";
pub const SORT_BY_PARAM: &str = "sortBy";

impl ConsultMode {
    pub fn query_value(self) -> &'static str {
        match self {
            ConsultMode::Remote => "Video Consult",
            ConsultMode::InPerson => "In Clinic",
        }
    }

    /// Unrecognized values map to `None`; the caller treats that as "no filter".
    pub fn from_query_value(value: &str) -> Option<Self> {
        ConsultMode::ALL
            .into_iter()
            .find(|mode| mode.query_value() == value)
    }
}

impl SortKey {
    pub fn query_value(self) -> &'static str {
        match self {
            SortKey::Fees => "fees",
            SortKey::Experience => "experience",
        }
    }

    pub fn from_query_value(value: &str) -> Option<Self> {
        SortKey::ALL.into_iter().find(|key| key.query_value() == value)
    }
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
