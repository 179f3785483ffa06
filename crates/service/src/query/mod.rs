//! Read-only lookups over the content schema.

pub mod scope;
pub mod service;

pub use scope::ContentScope;
pub use service::QueryService;
