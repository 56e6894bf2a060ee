//! SPARQL client layer.
//!
//! A small trait-based abstraction over SPARQL endpoints so the selection and
//! extraction code can run against a live endpoint or an in-memory fake.
//!
//! # Architecture
//!
//! - [`SparqlExecutor`] - Run a SELECT query and return its bindings
//! - [`SparqlClient`] - An executor bound to a concrete endpoint
//! - [`Query`] / [`QueryExt`] - Fluent builder with `$name` parameters
//! - [`ResultSet`], [`Binding`], [`Term`] - SPARQL JSON results
//!
//! # Usage
//!
//! ```ignore
//! use propgraph::sparql::{QueryExt, Iri};
//!
//! let rows = client
//!     .query("SELECT ?s ?o WHERE { ?s $property ?o . FILTER (?s = $entity) }")
//!     .param("property", &property)
//!     .param("entity", Iri("http://dbpedia.org/resource/Heat"))
//!     .fetch_all()
//!     .await?;
//!
//! for row in rows {
//!     println!("{} {}", row.value("s")?, row.value("o")?);
//! }
//! ```

mod macros;
mod query;
mod results;
mod traits;

pub mod backends;

pub use query::{Iri, Query, QueryExt, ToSparql};
pub use results::{Binding, ResultSet, Term, TermKind};
pub use traits::{SparqlClient, SparqlExecutor};
