//! Data access layer for SPARQL queries.
//!
//! Repositories own the query text and turn result rows into domain values,
//! using the `FromContext` derive macro for dependency injection.

mod edge;
mod property;
mod resource;

pub use edge::EdgeRepository;
pub use property::PropertyRepository;
pub use resource::ResourceRepository;
