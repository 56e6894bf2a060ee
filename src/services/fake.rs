//! In-memory SPARQL endpoint for service tests.

use std::sync::{Arc, Mutex};

use crate::config::Config;
use crate::context::Context;
use crate::error::AppError;
use crate::sparql::{Binding, ResultSet, SparqlExecutor, Term};

/// Answers each query with the first canned response whose needles all
/// occur in the query text, or with an empty result set.
#[derive(Default)]
pub(crate) struct FakeEndpoint {
    responses: Vec<(Vec<String>, ResultSet)>,
    fail_on: Option<String>,
    queries: Mutex<Vec<String>>,
}

impl FakeEndpoint {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(mut self, needles: &[&str], rows: ResultSet) -> Self {
        self.responses
            .push((needles.iter().map(|n| n.to_string()).collect(), rows));
        self
    }

    /// Predicate rows for the discovery query of `entity`.
    pub(crate) fn predicates(self, entity: &str, predicates: &[&str]) -> Self {
        let rows = predicates
            .iter()
            .map(|p| Binding::default().with("p", Term::uri(*p)))
            .collect();
        let needle = format!("<{entity}> ?p ?o");
        self.respond(&[needle.as_str()], ResultSet::from_rows(&["p"], rows))
    }

    /// Edge rows for the query of `property_term` bound to `entity`.
    pub(crate) fn edges(self, property_term: &str, entity: &str, objects: &[&str]) -> Self {
        let rows = objects
            .iter()
            .map(|o| {
                Binding::default()
                    .with("s", Term::uri(entity))
                    .with("o", Term::uri(*o))
            })
            .collect();
        let property_needle = format!("?s {property_term} ?o");
        let entity_needle = format!("(?s = <{entity}>)");
        self.respond(
            &[property_needle.as_str(), entity_needle.as_str()],
            ResultSet::from_rows(&["s", "o"], rows),
        )
    }

    pub(crate) fn fail_when(mut self, needle: &str) -> Self {
        self.fail_on = Some(needle.to_string());
        self
    }

    pub(crate) fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

/// Context whose client is `fake`, keeping the fake reachable for asserts.
pub(crate) fn context(fake: &Arc<FakeEndpoint>, config: Config) -> Context {
    Context {
        client: fake.clone(),
        config: Arc::new(config),
    }
}

#[async_trait::async_trait]
impl SparqlExecutor for FakeEndpoint {
    async fn select(&self, query: &str) -> Result<ResultSet, AppError> {
        self.queries.lock().unwrap().push(query.to_string());

        if let Some(needle) = &self.fail_on {
            if query.contains(needle.as_str()) {
                return Err(AppError::Endpoint {
                    status: 503,
                    body: "unavailable".to_string(),
                });
            }
        }

        Ok(self
            .responses
            .iter()
            .find(|(needles, _)| needles.iter().all(|n| query.contains(n.as_str())))
            .map(|(_, rows)| rows.clone())
            .unwrap_or_default())
    }
}
