//! Edge repository: subject-bound edges of one property.

use crate::context::{AppClient, Context};
use crate::di::FromContext;
use crate::error::AppError;
use crate::models::{EdgeRecord, Entity, Property};
use crate::sparql::{Binding, QueryExt};

/// Repository for per-property edge queries.
#[derive(FromContext, Clone)]
pub struct EdgeRepository {
    client: AppClient,
}

impl EdgeRepository {
    /// All `(subject, object)` pairs for `property` whose subject is `entity`.
    pub async fn edges(
        &self,
        property: &Property,
        entity: &Entity,
    ) -> Result<Vec<EdgeRecord>, AppError> {
        let rows = self
            .client
            .query("SELECT ?s ?o WHERE {?s $property ?o. FILTER (?s = $entity)}")
            .param("property", property)
            .param("entity", entity)
            .fetch_all()
            .await?;

        rows.iter().map(Self::row_to_edge).collect()
    }

    fn row_to_edge(row: &Binding) -> Result<EdgeRecord, AppError> {
        Ok(EdgeRecord::new(row.value("s")?, row.value("o")?))
    }
}
