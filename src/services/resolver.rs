//! Entity resolution from numeric page ids.

use crate::context::Context;
use crate::di::FromContext;
use crate::error::AppError;
use crate::repositories::ResourceRepository;

/// Maps `dbo:wikiPageID` values back to entity URIs.
///
/// Build it from a context created with
/// [`Context::for_resolver`](crate::context::Context::for_resolver).
#[derive(FromContext, Clone)]
pub struct EntityResolver {
    resource_repo: ResourceRepository,
}

impl EntityResolver {
    /// URI for `page_id`, or `None` when there is no match or the lookup
    /// failed for any reason. Failures are logged.
    pub async fn resolve(&self, page_id: u64) -> Option<String> {
        match self.try_resolve(page_id).await {
            Ok(uri) => uri,
            Err(e) => {
                tracing::warn!(page_id, error = %e, "Page id lookup failed");
                None
            }
        }
    }

    /// Like [`resolve`](Self::resolve) but keeps "not found" (`Ok(None)`)
    /// apart from a failed query (`Err`).
    pub async fn try_resolve(&self, page_id: u64) -> Result<Option<String>, AppError> {
        let uri = self.resource_repo.find_by_page_id(page_id).await?;
        tracing::debug!(page_id, uri = ?uri, "Resolved page id");
        Ok(uri)
    }
}
