//! SPARQL 1.1 Protocol backend over HTTP.
//!
//! Queries are sent as `GET <endpoint>?query=...` with an optional
//! `default-graph-uri`, asking for `application/sparql-results+json`.
//!
//! # Example
//!
//! ```ignore
//! use propgraph::sparql::backends::http::{ClientConfig, HttpClient};
//! use propgraph::sparql::QueryExt;
//!
//! let client = HttpClient::new(ClientConfig::new("https://dbpedia.org/sparql"))?;
//! let rows = client.query("SELECT ?s WHERE { ?s ?p ?o } LIMIT 1").fetch_all().await?;
//! ```

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::StatusCode;

use crate::config::EndpointConfig;
use crate::error::AppError;
use crate::sparql::results::ResultSet;
use crate::sparql::traits::{SparqlClient, SparqlExecutor};

const SPARQL_RESULTS_JSON: &str = "application/sparql-results+json";

/// Connection settings, fixed for the lifetime of an [`HttpClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub endpoint: String,
    pub default_graph: Option<String>,
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            default_graph: None,
            timeout: None,
            user_agent: EndpointConfig::default().user_agent,
        }
    }

    /// Builds client settings from the `[endpoint]` config section, with
    /// `endpoint` as the URL to query.
    pub fn from_config(endpoint: impl Into<String>, config: &EndpointConfig) -> Self {
        Self {
            endpoint: endpoint.into(),
            default_graph: config.default_graph.clone(),
            timeout: config.timeout_secs.map(Duration::from_secs),
            user_agent: config.user_agent.clone(),
        }
    }

    pub fn with_default_graph(mut self, graph: impl Into<String>) -> Self {
        self.default_graph = Some(graph.into());
        self
    }
}

/// SPARQL endpoint client.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    config: Arc<ClientConfig>,
}

impl HttpClient {
    /// Creates a client for the configured endpoint.
    pub fn new(config: ClientConfig) -> Result<Self, AppError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl SparqlExecutor for HttpClient {
    async fn select(&self, query: &str) -> Result<ResultSet, AppError> {
        let mut params = vec![("query", query)];
        if let Some(graph) = self.config.default_graph.as_deref() {
            params.push(("default-graph-uri", graph));
        }

        let response = self
            .http
            .get(&self.config.endpoint)
            .query(&params)
            .header(ACCEPT, HeaderValue::from_static(SPARQL_RESULTS_JSON))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status == StatusCode::BAD_REQUEST {
            return Err(AppError::Query {
                message: body,
                query: query.to_string(),
            });
        }
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "SPARQL endpoint error");
            return Err(AppError::Endpoint {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| AppError::MalformedResponse(e.to_string()))
    }
}

impl SparqlClient for HttpClient {
    fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    fn default_graph(&self) -> Option<&str> {
        self.config.default_graph.as_deref()
    }
}
