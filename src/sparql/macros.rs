//! Macro for inline SPARQL queries.

/// Builds a [`Query`](crate::sparql::Query) with optional `$name` parameters.
///
/// # Usage
///
/// ```ignore
/// use propgraph::sparql;
///
/// let query = sparql!(client, "SELECT ?p WHERE { $entity ?p ?o }", entity = &entity);
/// let rows = query.fetch_all().await?;
/// ```
#[macro_export]
macro_rules! sparql {
    ($client:expr, $query:expr) => {
        $client.query($query)
    };
    ($client:expr, $query:expr, $($name:ident = $value:expr),+ $(,)?) => {
        $client.query($query)$(.param(stringify!($name), $value))+
    };
}
