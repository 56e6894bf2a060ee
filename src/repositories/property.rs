//! Property repository: which predicates an entity uses.

use crate::context::{AppClient, AppConfig, Context};
use crate::di::FromContext;
use crate::error::AppError;
use crate::models::Entity;
use crate::sparql::QueryExt;

/// Repository for predicate discovery.
#[derive(FromContext, Clone)]
pub struct PropertyRepository {
    client: AppClient,
    config: AppConfig,
}

impl PropertyRepository {
    /// Predicates on the outgoing, non-literal edges of `entity` that pass
    /// the `[discovery]` include/exclude filters.
    ///
    /// One entry per returned row, in endpoint order. Duplicates are kept.
    pub async fn predicates_of(&self, entity: &Entity) -> Result<Vec<String>, AppError> {
        let discovery = &self.config.discovery;

        let mut query = self
            .client
            .query(&Self::discovery_template(discovery.exclude.len()))
            .param("entity", entity)
            .param("include", &discovery.include);
        for (i, pattern) in discovery.exclude.iter().enumerate() {
            query = query.param(&format!("exclude{i}"), pattern);
        }

        let rows = query.fetch_all().await?;
        rows.iter()
            .map(|row| row.value("p").map(str::to_string))
            .collect()
    }

    /// `select distinct ?p` over non-literal objects with one `!regex` clause
    /// per exclusion pattern.
    fn discovery_template(excludes: usize) -> String {
        let mut filter = String::from("!isLiteral(?o) && regex(STR(?p),$include)");
        for i in 0..excludes {
            filter.push_str(&format!(" && !regex(STR(?p),$exclude{i})"));
        }
        format!("select distinct ?p where {{ $entity ?p ?o. FILTER({filter})}} ")
    }
}
