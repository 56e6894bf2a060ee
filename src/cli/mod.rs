//! CLI module for propgraph.
//!
//! Subcommands:
//! - `extract`: select properties and write their edge lists
//! - `properties`: select properties and print them
//! - `resolve`: map a page id to an entity URI

mod extract;
mod properties;
mod resolve;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use figment::providers::Serialized;
use figment::Figment;

use crate::config::{Config, ConfigError, PropertyConfig};
use crate::error::AppError;
use crate::models::EntityList;

/// propgraph - Property subgraph extraction from SPARQL endpoints
#[derive(Parser)]
#[command(name = "propgraph")]
#[command(about = "Extract per-property subgraphs for a set of entities from a SPARQL endpoint")]
#[command(version)]
pub struct App {
    /// Run in verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Select properties and write one edge list per property
    Extract(DatasetArgs),

    /// Select properties and print them, one per line
    Properties(DatasetArgs),

    /// Print the entity URI for a numeric page id
    Resolve {
        /// Page id (dbo:wikiPageID)
        page_id: u64,

        /// Endpoint to query instead of the configured resolver endpoint
        #[arg(short = 'm', long)]
        endpoint: Option<String>,
    },
}

/// Arguments shared by commands working on a dataset.
#[derive(Args, Debug, Clone)]
pub struct DatasetArgs {
    /// Dataset name (key in the property file, directory under the output root)
    #[arg(short = 'k', long)]
    pub dataset: String,

    /// Entity file; defaults to `<output root>/<dataset>/all.dat`
    #[arg(short, long)]
    pub entities: Option<PathBuf>,

    /// Per-dataset property lists (JSON)
    #[arg(short, long = "config-file", default_value = "config/properties.json")]
    pub config_file: PathBuf,

    /// SPARQL endpoint URL
    #[arg(short = 'm', long)]
    pub endpoint: Option<String>,

    /// Default graph URI sent with every query
    #[arg(short = 'd', long)]
    pub default_graph: Option<String>,

    /// Output root directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl DatasetArgs {
    /// Layered configuration with these flags on top.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut overrides = Figment::new();
        if let Some(url) = &self.endpoint {
            overrides = overrides.merge(Serialized::default("endpoint.url", url));
        }
        if let Some(graph) = &self.default_graph {
            overrides = overrides.merge(Serialized::default("endpoint.default_graph", graph));
        }
        if let Some(root) = &self.output {
            overrides = overrides.merge(Serialized::default("output.root", root));
        }
        Config::load_with(overrides)
    }

    pub fn entity_file(&self, config: &Config) -> PathBuf {
        self.entities
            .clone()
            .unwrap_or_else(|| config.output.root.join(&self.dataset).join("all.dat"))
    }

    pub fn load_entities(&self, config: &Config) -> Result<EntityList, AppError> {
        let path = self.entity_file(config);
        let entities = EntityList::from_file(&path)?;
        tracing::info!(
            path = %path.display(),
            entities = entities.len(),
            "Loaded entities"
        );
        Ok(entities)
    }

    pub fn load_property_config(&self) -> Result<PropertyConfig, AppError> {
        PropertyConfig::load(&self.config_file)
    }

    /// Entities needed to select properties: none when the dataset has a
    /// configured list, the entity file otherwise.
    pub fn entities_for_selection(
        &self,
        config: &Config,
        property_config: &PropertyConfig,
    ) -> Result<EntityList, AppError> {
        if property_config.properties_for(&self.dataset).is_some() {
            return Ok(EntityList::default());
        }
        self.load_entities(config)
    }
}

impl App {
    /// Run the CLI application.
    pub async fn run(self) -> color_eyre::Result<()> {
        match &self.command {
            Command::Extract(args) => self.run_extract(args).await,
            Command::Properties(args) => self.run_properties(args).await,
            Command::Resolve { page_id, endpoint } => {
                self.run_resolve(*page_id, endpoint.as_deref()).await
            }
        }
    }
}
