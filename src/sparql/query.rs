//! Query builder for parameterised SPARQL text.
//!
//! SPARQL endpoints have no bind parameters, so values are rendered into
//! the query text client side. Placeholders use the `$name` form; a `$name`
//! with no matching parameter is left alone and read by the endpoint as an
//! ordinary `$`-variable.

use std::collections::HashMap;

use crate::error::AppError;
use crate::models::{Entity, Property};
use crate::sparql::results::{Binding, ResultSet};
use crate::sparql::traits::SparqlExecutor;

/// Renders a value as SPARQL query text.
pub trait ToSparql {
    fn to_sparql(&self) -> String;
}

/// An IRI given as a plain string, rendered as `<iri>`.
#[derive(Debug, Clone, Copy)]
pub struct Iri<'a>(pub &'a str);

impl ToSparql for Iri<'_> {
    fn to_sparql(&self) -> String {
        format!("<{}>", self.0)
    }
}

impl ToSparql for Entity {
    fn to_sparql(&self) -> String {
        self.iri()
    }
}

impl ToSparql for Property {
    fn to_sparql(&self) -> String {
        self.query_term()
    }
}

/// Strings become quoted literals.
impl ToSparql for str {
    fn to_sparql(&self) -> String {
        let mut out = String::with_capacity(self.len() + 2);
        out.push('"');
        for c in self.chars() {
            match c {
                '"' => out.push_str("\\\""),
                '\\' => out.push_str("\\\\"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                c => out.push(c),
            }
        }
        out.push('"');
        out
    }
}

impl ToSparql for String {
    fn to_sparql(&self) -> String {
        self.as_str().to_sparql()
    }
}

macro_rules! impl_to_sparql_number {
    ($($ty:ty),*) => {
        $(impl ToSparql for $ty {
            fn to_sparql(&self) -> String {
                self.to_string()
            }
        })*
    };
}

impl_to_sparql_number!(i32, i64, u32, u64, usize);

impl<T: ToSparql + ?Sized> ToSparql for &T {
    fn to_sparql(&self) -> String {
        (**self).to_sparql()
    }
}

/// A builder for constructing and executing SPARQL queries.
///
/// # Example
///
/// ```ignore
/// let row = Query::new(&client, "SELECT ?s WHERE { ?s $key $id }")
///     .param("key", Iri("http://dbpedia.org/ontology/wikiPageID"))
///     .param("id", 736u64)
///     .fetch_one()
///     .await?;
/// ```
pub struct Query<'a, E: SparqlExecutor + ?Sized> {
    executor: &'a E,
    template: String,
    params: HashMap<String, String>,
}

impl<'a, E: SparqlExecutor + ?Sized> Query<'a, E> {
    /// Creates a new query builder.
    ///
    /// # Arguments
    ///
    /// * `executor` - The executor to run the query against
    /// * `template` - Query text with `$name` placeholders
    pub fn new(executor: &'a E, template: &str) -> Self {
        Self {
            executor,
            template: template.to_string(),
            params: HashMap::new(),
        }
    }

    /// Binds a placeholder to a value.
    ///
    /// # Arguments
    ///
    /// * `name` - The placeholder name (without the $ prefix)
    /// * `value` - Anything renderable as SPARQL text
    pub fn param<T: ToSparql>(mut self, name: &str, value: T) -> Self {
        self.params.insert(name.to_string(), value.to_sparql());
        self
    }

    /// The final query text with every bound placeholder substituted.
    pub fn text(&self) -> String {
        render(&self.template, &self.params)
    }

    /// Executes the query and returns the complete result set.
    pub async fn execute(self) -> Result<ResultSet, AppError> {
        let text = self.text();
        tracing::trace!(query = %text, "Executing SPARQL query");
        self.executor.select(&text).await
    }

    /// Executes the query and returns its rows.
    pub async fn fetch_all(self) -> Result<Vec<Binding>, AppError> {
        Ok(self.execute().await?.into_rows())
    }

    /// Executes the query and returns the first row, if any.
    pub async fn fetch_one(self) -> Result<Option<Binding>, AppError> {
        Ok(self.execute().await?.into_rows().into_iter().next())
    }
}

/// Replaces `$name` tokens whose name is bound in `params`.
///
/// Names are matched as whole identifiers, so binding `e` leaves `$ex`
/// untouched.
fn render(template: &str, params: &HashMap<String, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        let name_len = after
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(after.len());
        let name = &after[..name_len];

        match params.get(name) {
            Some(value) if !name.is_empty() => out.push_str(value),
            _ => {
                out.push('$');
                out.push_str(name);
            }
        }
        rest = &after[name_len..];
    }
    out.push_str(rest);
    out
}

/// Extension trait providing a convenient `query()` method.
///
/// Implemented for every [`SparqlExecutor`], so `client.query("...")` works
/// on concrete clients and on `Arc<dyn SparqlExecutor>` alike.
pub trait QueryExt: SparqlExecutor {
    /// Creates a new query builder for this executor.
    fn query(&self, template: &str) -> Query<'_, Self>
    where
        Self: Sized,
    {
        Query::new(self, template)
    }
}

impl<E: SparqlExecutor> QueryExt for E {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sparql::results::Term;

    // Mock executor for testing
    struct MockExecutor {
        expected_query: String,
        rows: Vec<Binding>,
    }

    #[async_trait::async_trait]
    impl SparqlExecutor for MockExecutor {
        async fn select(&self, query: &str) -> Result<ResultSet, AppError> {
            assert_eq!(query, self.expected_query);
            Ok(ResultSet::from_rows(&["s"], self.rows.clone()))
        }
    }

    #[tokio::test]
    async fn test_query_no_params() {
        let executor = MockExecutor {
            expected_query: "SELECT ?s WHERE { ?s ?p ?o }".to_string(),
            rows: vec![],
        };

        let rows = executor
            .query("SELECT ?s WHERE { ?s ?p ?o }")
            .fetch_all()
            .await
            .unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_query_with_params() {
        let executor = MockExecutor {
            expected_query:
                "SELECT ?s ?o WHERE {?s <http://dbpedia.org/ontology/director> ?o. FILTER (?s = <http://dbpedia.org/resource/Heat>)}"
                    .to_string(),
            rows: vec![Binding::default().with("s", Term::uri("http://dbpedia.org/resource/Heat"))],
        };

        let row = executor
            .query("SELECT ?s ?o WHERE {?s $property ?o. FILTER (?s = $entity)}")
            .param("property", Property::new("http://dbpedia.org/ontology/director"))
            .param("entity", Entity::new("http://dbpedia.org/resource/Heat"))
            .fetch_one()
            .await
            .unwrap();
        assert_eq!(row.unwrap().value("s").unwrap(), "http://dbpedia.org/resource/Heat");
    }

    #[test]
    fn test_render_matches_whole_names() {
        let mut params = HashMap::new();
        params.insert("e".to_string(), "<x>".to_string());
        assert_eq!(render("$e $ex $e.", &params), "<x> $ex <x>.");
    }

    #[test]
    fn test_render_keeps_lone_dollar() {
        assert_eq!(render("cost $ 5", &HashMap::new()), "cost $ 5");
    }

    #[test]
    fn test_string_literal_escaping() {
        assert_eq!("a\"b\\c".to_sparql(), r#""a\"b\\c""#);
        assert_eq!(Iri("http://x/y").to_sparql(), "<http://x/y>");
        assert_eq!(42u64.to_sparql(), "42");
    }
}
