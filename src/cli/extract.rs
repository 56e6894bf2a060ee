//! Extract command handler.

use color_eyre::Result;

use crate::context::Context;
use crate::di::FromRef;
use crate::services::{PropertySelector, SubgraphExtractor};

use super::{App, DatasetArgs};

impl App {
    /// Select the dataset's properties and write their edge lists.
    pub async fn run_extract(&self, args: &DatasetArgs) -> Result<()> {
        let config = args.load_config()?;
        let entities = args.load_entities(&config)?;
        let property_config = args.load_property_config()?;
        let ctx = Context::connect(config)?;

        let properties = PropertySelector::from_ref(&ctx)
            .select(&entities, &args.dataset, &property_config)
            .await?;

        tracing::info!(
            dataset = %args.dataset,
            properties = properties.len(),
            "Extracting property subgraphs"
        );
        let report = SubgraphExtractor::from_ref(&ctx)
            .extract(&args.dataset, &properties, &entities)
            .await?;

        tracing::info!(
            files = report.outputs.len(),
            edges = report.total_edges(),
            "Extraction complete"
        );
        Ok(())
    }
}
