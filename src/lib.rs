//! propgraph - Property subgraph extraction from SPARQL endpoints
//!
//! Selects the properties worth extracting for a set of entities (from a
//! static configuration or by frequency-based discovery) and writes one
//! edge list per property.

pub mod cli;
pub mod config;
pub mod context;
pub mod di;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;
pub mod sparql;

// Re-export FromRef at crate root for di-macros generated code
pub use di::FromRef;
