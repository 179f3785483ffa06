//! Service layer over the content schema.
//! - `query`: read-only lookups, scoped text/image reads.
//! - `consistency`: transactional writes that keep pages, links and menu items in step.
//! - `seed`: default catalog for an empty database.

pub mod errors;
pub mod query;
pub mod consistency;
pub mod seed;
#[cfg(test)]
mod test_support;

pub use consistency::ConsistencyService;
pub use errors::ServiceError;
pub use query::{ContentScope, QueryService};
