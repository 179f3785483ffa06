//! Consistency module: composite writes over the Page/Link/MenuItem triad.
//!
//! Every operation that touches more than one row runs in a single
//! transaction; a failing step rolls back everything before it.

pub mod domain;
pub mod service;

pub use domain::{Feature, PageChanges, RemovedFeature};
pub use service::ConsistencyService;
