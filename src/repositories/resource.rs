//! Resource repository: lookups of entity URIs by ontology identifiers.

use crate::context::{AppClient, Context};
use crate::di::FromContext;
use crate::error::AppError;
use crate::sparql::{Iri, QueryExt};

const WIKI_PAGE_ID: &str = "http://dbpedia.org/ontology/wikiPageID";

/// Repository for resource lookups.
#[derive(FromContext, Clone)]
pub struct ResourceRepository {
    client: AppClient,
}

impl ResourceRepository {
    /// URI of the resource whose `dbo:wikiPageID` equals `page_id`.
    ///
    /// `Ok(None)` when nothing matches; the first row wins when several do.
    pub async fn find_by_page_id(&self, page_id: u64) -> Result<Option<String>, AppError> {
        let row = self
            .client
            .query("select ?s where {?s $key $id }")
            .param("key", Iri(WIKI_PAGE_ID))
            .param("id", page_id)
            .fetch_one()
            .await?;

        row.map(|row| row.value("s").map(str::to_string))
            .transpose()
    }
}
