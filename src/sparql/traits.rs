//! Core traits for SPARQL endpoint access.
//!
//! - [`SparqlExecutor`] - Required for anything that answers queries
//! - [`SparqlClient`] - Adds endpoint metadata for logging

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AppError;
use crate::sparql::results::ResultSet;

/// Executes SPARQL SELECT queries.
///
/// Every call blocks the caller (awaits) until the endpoint has answered;
/// implementations never retry.
#[async_trait]
pub trait SparqlExecutor: Send + Sync {
    /// Executes a SELECT query and returns all bindings.
    ///
    /// # Arguments
    ///
    /// * `query` - Complete SPARQL query text
    async fn select(&self, query: &str) -> Result<ResultSet, AppError>;
}

/// An executor bound to a single remote endpoint.
///
/// Configuration is fixed at construction; there is no way to change the
/// endpoint, default graph or response format afterwards.
pub trait SparqlClient: SparqlExecutor {
    /// The endpoint URL queries are sent to.
    fn endpoint(&self) -> &str;

    /// The default graph applied to every query, if any.
    fn default_graph(&self) -> Option<&str>;
}

#[async_trait]
impl<T: SparqlExecutor + ?Sized> SparqlExecutor for Arc<T> {
    async fn select(&self, query: &str) -> Result<ResultSet, AppError> {
        (**self).select(query).await
    }
}
