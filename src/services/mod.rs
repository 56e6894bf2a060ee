//! Business logic services for property subgraph extraction.
//!
//! Services orchestrate repositories and hold the selection and extraction
//! rules, using the `FromContext` derive macro for dependency injection.

mod extractor;
mod resolver;
mod selector;

#[cfg(test)]
pub(crate) mod fake;

pub use extractor::{ExtractionReport, OutputLayout, PropertyOutput, SubgraphExtractor};
pub use resolver::EntityResolver;
pub use selector::{cutoff, FrequencyCounter, PropertySelector};
