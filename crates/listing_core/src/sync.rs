//! Mapping between [`Criteria`] and the address bar's query parameters.

use shared::{
    domain::{ConsultMode, SortKey},
    protocol::{CONSULT_TYPE_PARAM, SORT_BY_PARAM, SPECIALTY_PARAM},
};
use thiserror::Error;
use url::Url;

use crate::{criteria::Criteria, query::QueryParams};

/// Reads criteria out of a query. Total: anything unrecognized is absent.
pub fn decode(query: &QueryParams) -> Criteria {
    Criteria {
        mode: query
            .get(CONSULT_TYPE_PARAM)
            .and_then(ConsultMode::from_query_value),
        specialties: query
            .get_all(SPECIALTY_PARAM)
            .map(str::to_string)
            .collect(),
        sort_key: query.get(SORT_BY_PARAM).and_then(SortKey::from_query_value),
    }
}

/// Writes `criteria` over `query`. Parameters unrelated to filtering are
/// carried over untouched.
pub fn encode(criteria: &Criteria, query: &QueryParams) -> QueryParams {
    let mut next = query.clone();

    match criteria.mode {
        Some(mode) => next.set(CONSULT_TYPE_PARAM, mode.query_value()),
        None => next.delete(CONSULT_TYPE_PARAM),
    }

    next.delete(SPECIALTY_PARAM);
    for specialty in &criteria.specialties {
        next.append(SPECIALTY_PARAM, specialty.as_str());
    }

    match criteria.sort_key {
        Some(key) => next.set(SORT_BY_PARAM, key.query_value()),
        None => next.delete(SORT_BY_PARAM),
    }

    next
}

/// The navigation subsystem's view of the current address.
///
/// Filter edits only ever replace the current entry; they never add a
/// back-button stop.
pub trait Location {
    fn query(&self) -> QueryParams;
    fn replace_query(&mut self, query: QueryParams);
}

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("invalid location url '{raw}': {source}")]
    InvalidUrl {
        raw: String,
        #[source]
        source: url::ParseError,
    },
}

/// A single address held as a parsed [`Url`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlLocation {
    url: Url,
}

impl UrlLocation {
    pub fn new(url: Url) -> Self {
        Self { url }
    }

    pub fn parse(raw: &str) -> Result<Self, LocationError> {
        Url::parse(raw)
            .map(Self::new)
            .map_err(|source| LocationError::InvalidUrl {
                raw: raw.to_string(),
                source,
            })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }
}

impl Location for UrlLocation {
    fn query(&self) -> QueryParams {
        QueryParams::parse(self.url.query().unwrap_or_default())
    }

    fn replace_query(&mut self, query: QueryParams) {
        if query.is_empty() {
            self.url.set_query(None);
        } else {
            self.url.set_query(Some(&query.to_query_string()));
        }
        tracing::trace!(url = %self.url, "replaced location query");
    }
}

#[cfg(test)]
#[path = "tests/sync_tests.rs"]
mod tests;
