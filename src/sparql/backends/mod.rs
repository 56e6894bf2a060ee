//! Backend implementations for SPARQL endpoints.
//!
//! Each backend implements the traits from [`crate::sparql`]:
//!
//! - [`SparqlExecutor`](crate::sparql::SparqlExecutor) - Required
//! - [`SparqlClient`](crate::sparql::SparqlClient) - Required for remote endpoints
//!
//! | Backend | Module | Transport |
//! |---------|--------|-----------|
//! | SPARQL 1.1 Protocol | [`http`] | HTTP GET, JSON results |

pub mod http;
