//! Properties command handler.

use color_eyre::Result;

use crate::context::Context;
use crate::di::FromRef;
use crate::services::PropertySelector;

use super::{App, DatasetArgs};

impl App {
    /// Print the properties that `extract` would use.
    pub async fn run_properties(&self, args: &DatasetArgs) -> Result<()> {
        let config = args.load_config()?;
        let property_config = args.load_property_config()?;
        let entities = args.entities_for_selection(&config, &property_config)?;
        let ctx = Context::connect(config)?;

        let properties = PropertySelector::from_ref(&ctx)
            .select(&entities, &args.dataset, &property_config)
            .await?;

        for property in &properties {
            println!("{property}");
        }
        Ok(())
    }
}
