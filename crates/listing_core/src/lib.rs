//! Filter state, derived listing, and address synchronization for the
//! provider directory.
//!
//! A [`FilterSession`] owns the three moving parts and keeps them convergent:
//!
//! ```text
//! Location (query string) --decode once--> CriteriaStore
//!        ^                                      |
//!        |                                  toggle_*
//!        +------- encode (replace) ------------+----> engine::derive --> view
//! ```

pub mod criteria;
pub mod engine;
pub mod panel;
pub mod query;
pub mod session;
pub mod sync;

pub use criteria::{Criteria, CriteriaStore, FilterAction};
pub use engine::derive;
pub use panel::{specialty_catalog, FilterPanel, PanelOption, PanelSection};
pub use query::QueryParams;
pub use session::FilterSession;
pub use sync::{decode, encode, Location, LocationError, UrlLocation};
