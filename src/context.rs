//! Application context providing the dependency injection root.

use std::sync::Arc;

use crate::config::Config;
use crate::di::Context as ContextDerive;
use crate::error::AppError;
use crate::sparql::backends::http::{ClientConfig, HttpClient};
use crate::sparql::SparqlExecutor;

/// Shared SPARQL executor used by every repository in a run.
pub type AppClient = Arc<dyn SparqlExecutor>;

/// Shared, immutable configuration.
pub type AppConfig = Arc<Config>;

/// Root application context for dependency injection.
///
/// Holds the single endpoint client of a run together with the resolved
/// configuration. `#[derive(Context)]` generates `FromRef` implementations
/// for each field so repositories and services can be built with
/// `FromRef::from_ref(&ctx)`.
#[derive(ContextDerive, Clone)]
pub struct Context {
    /// SPARQL endpoint client.
    pub client: AppClient,
    /// Application configuration.
    pub config: AppConfig,
}

impl Context {
    /// Creates a context around any executor.
    pub fn new(client: impl SparqlExecutor + 'static, config: Config) -> Self {
        Self {
            client: Arc::new(client),
            config: Arc::new(config),
        }
    }

    /// Client settings for `endpoint.url`, carrying the default graph,
    /// timeout and user agent of the endpoint section.
    pub fn client_config(config: &Config) -> Result<ClientConfig, AppError> {
        let url = config
            .endpoint
            .url
            .clone()
            .ok_or(AppError::MissingEndpoint)?;
        Ok(ClientConfig::from_config(url, &config.endpoint))
    }

    /// Creates a context talking to `endpoint.url`.
    pub fn connect(config: Config) -> Result<Self, AppError> {
        let client = HttpClient::new(Self::client_config(&config)?)?;
        tracing::info!(
            endpoint = %client.config().endpoint,
            default_graph = ?client.config().default_graph,
            "Using SPARQL endpoint"
        );
        Ok(Self::new(client, config))
    }

    /// Creates a context talking to the page-id resolver endpoint.
    ///
    /// The resolver always queries its own endpoint without a default graph.
    pub fn for_resolver(config: Config) -> Result<Self, AppError> {
        let client_config = ClientConfig {
            default_graph: None,
            ..ClientConfig::from_config(config.resolver.endpoint.clone(), &config.endpoint)
        };
        let client = HttpClient::new(client_config)?;
        Ok(Self::new(client, config))
    }
}
