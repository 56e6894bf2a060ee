//! Resolve command handler.

use color_eyre::Result;

use crate::config::Config;
use crate::context::Context;
use crate::di::FromRef;
use crate::services::EntityResolver;

use super::App;

impl App {
    /// Print the entity URI for `page_id`, if one is found.
    pub async fn run_resolve(&self, page_id: u64, endpoint: Option<&str>) -> Result<()> {
        let mut config = Config::load()?;
        if let Some(endpoint) = endpoint {
            config.resolver.endpoint = endpoint.to_string();
        }

        let ctx = Context::for_resolver(config)?;
        match EntityResolver::from_ref(&ctx).resolve(page_id).await {
            Some(uri) => println!("{uri}"),
            None => tracing::warn!(page_id, "No URI found"),
        }
        Ok(())
    }
}
