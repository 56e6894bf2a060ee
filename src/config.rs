//! Configuration with layered resolution using figment.
//!
//! Resolution order (highest priority last):
//! 1. Built-in defaults
//! 2. User config: `~/.config/propgraph/config.toml` (XDG) or platform config dir
//! 3. Project config: `.propgraph.toml`
//! 4. Environment variables: `PROPGRAPH_*`, nested with `__`
//!    (e.g. `PROPGRAPH_ENDPOINT__DEFAULT_GRAPH`)
//! 5. Command-line flags
//!
//! # Example
//!
//! ```toml
//! [endpoint]
//! url = "https://dbpedia.org/sparql"
//! default_graph = "http://dbpedia.org"
//! timeout_secs = 120
//!
//! [output]
//! root = "datasets"
//!
//! [discovery]
//! include = "dbpedia.org/ontology"
//! exclude = ["wiki", "thumb"]
//! max_drop = 0.5
//! sentinel = "dct:subject"
//!
//! [resolver]
//! endpoint = "http://dbpedia.org/sparql"
//! ```
//!
//! The per-dataset property lists live in a separate JSON file
//! (`config/properties.json` by default), see [`PropertyConfig`].

use std::collections::HashMap;
use std::ops::Deref;
use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment, Provider,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Boxed wrapper for figment::Error to reduce Result size on the stack.
#[derive(Debug)]
pub struct ConfigError(Box<figment::Error>);

impl Deref for ConfigError {
    type Target = figment::Error;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self(Box::new(err))
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoint: EndpointConfig,
    pub output: OutputConfig,
    pub discovery: DiscoveryConfig,
    pub resolver: ResolverConfig,
}

/// SPARQL endpoint used for discovery and extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Endpoint URL. Usually given on the command line.
    pub url: Option<String>,
    /// Default graph sent as `default-graph-uri` with every query.
    pub default_graph: Option<String>,
    /// Request timeout. `None` keeps the transport default.
    pub timeout_secs: Option<u64>,
    /// User-Agent header sent to the endpoint.
    pub user_agent: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: None,
            default_graph: None,
            timeout_secs: None,
            user_agent: concat!("propgraph/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Where edge lists are written.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Root directory holding one subdirectory per dataset.
    pub root: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("datasets"),
        }
    }
}

/// Tuning for the frequency-based property discovery.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Predicates must contain this substring.
    pub include: String,
    /// Predicates containing any of these substrings are dropped.
    pub exclude: Vec<String>,
    /// Largest relative frequency drop between neighbours that still
    /// admits the next property (0.5 = at most a 50% drop).
    pub max_drop: f64,
    /// Property appended to every discovered list.
    pub sentinel: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            include: "dbpedia.org/ontology".to_string(),
            exclude: vec!["wiki".to_string(), "thumb".to_string()],
            max_drop: 0.5,
            sentinel: crate::models::SUBJECT_PROPERTY.to_string(),
        }
    }
}

/// Endpoint used to map page ids back to entity URIs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    pub endpoint: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://dbpedia.org/sparql".to_string(),
        }
    }
}

impl Config {
    /// Load config with layered resolution (defaults → user → project → env).
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load config with an extra highest-priority provider, typically the
    /// values given on the command line.
    pub fn load_with<P: Provider>(overrides: P) -> Result<Self, ConfigError> {
        Self::figment()
            .merge(overrides)
            .extract()
            .map_err(ConfigError::from)
    }

    fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            // User config (lowest priority file)
            .merge(Toml::file(Self::user_config_path()))
            // Project config
            .merge(Toml::file(".propgraph.toml"))
            // Environment variables
            .merge(Env::prefixed("PROPGRAPH_").split("__"))
    }

    /// User config path: ~/.config/propgraph/config.toml (XDG) or platform config dir.
    fn user_config_path() -> PathBuf {
        if let Some(home) = dirs::home_dir() {
            let xdg_path = home.join(".config").join("propgraph").join("config.toml");
            if xdg_path.exists() {
                return xdg_path;
            }
        }
        dirs::config_dir()
            .map(|p| p.join("propgraph").join("config.toml"))
            .unwrap_or_default()
    }
}

/// Per-dataset property lists, loaded from a JSON object such as
/// `{"movielens": ["dbo:director", "dbo:starring", "dct:subject"]}`.
///
/// Immutable once loaded.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct PropertyConfig {
    datasets: HashMap<String, Vec<String>>,
}

impl PropertyConfig {
    /// Reads and parses the property file. Malformed JSON is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Configured properties for `dataset`, in file order.
    pub fn properties_for(&self, dataset: &str) -> Option<&[String]> {
        self.datasets.get(dataset).map(Vec::as_slice)
    }
}
