//! SPARQL 1.1 JSON results.
//!
//! ```json
//! {
//!   "head": { "vars": ["s", "o"] },
//!   "results": { "bindings": [
//!     { "s": { "type": "uri", "value": "http://..." },
//!       "o": { "type": "literal", "value": "Heat", "xml:lang": "en" } }
//!   ] }
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// The full answer to a SELECT query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    pub head: Head,
    pub results: Bindings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Head {
    #[serde(default)]
    pub vars: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bindings {
    pub bindings: Vec<Binding>,
}

impl ResultSet {
    /// Builds a result set from rows, mostly useful for fakes in tests.
    pub fn from_rows(vars: &[&str], rows: Vec<Binding>) -> Self {
        Self {
            head: Head {
                vars: vars.iter().map(|v| v.to_string()).collect(),
            },
            results: Bindings { bindings: rows },
        }
    }

    pub fn vars(&self) -> &[String] {
        &self.head.vars
    }

    pub fn rows(&self) -> &[Binding] {
        &self.results.bindings
    }

    pub fn into_rows(self) -> Vec<Binding> {
        self.results.bindings
    }

    pub fn len(&self) -> usize {
        self.results.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.bindings.is_empty()
    }
}

/// Kind of an RDF term in a result row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TermKind {
    Uri,
    Literal,
    /// Non-standard spelling still emitted by Virtuoso (and so DBpedia).
    TypedLiteral,
    Bnode,
}

/// One bound value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    #[serde(rename = "type")]
    pub kind: TermKind,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
    #[serde(
        rename = "xml:lang",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub lang: Option<String>,
}

impl Term {
    pub fn uri(value: impl Into<String>) -> Self {
        Self {
            kind: TermKind::Uri,
            value: value.into(),
            datatype: None,
            lang: None,
        }
    }

    pub fn literal(value: impl Into<String>) -> Self {
        Self {
            kind: TermKind::Literal,
            value: value.into(),
            datatype: None,
            lang: None,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self.kind, TermKind::Literal | TermKind::TypedLiteral)
    }
}

/// A single result row: variable name to bound term.
///
/// Unbound (OPTIONAL) variables are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Binding {
    data: HashMap<String, Term>,
}

impl Binding {
    /// Builder used by fakes: `Binding::default().with("s", Term::uri(..))`.
    pub fn with(mut self, var: &str, term: Term) -> Self {
        self.data.insert(var.to_string(), term);
        self
    }

    /// Gets the term bound to `var`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::MissingVariable`] if the variable is unbound.
    pub fn get(&self, var: &str) -> Result<&Term, AppError> {
        self.data
            .get(var)
            .ok_or_else(|| AppError::MissingVariable(var.to_string()))
    }

    /// Gets the term bound to `var`, or `None` when unbound.
    pub fn get_opt(&self, var: &str) -> Option<&Term> {
        self.data.get(var)
    }

    /// Lexical value of the term bound to `var`.
    pub fn value(&self, var: &str) -> Result<&str, AppError> {
        self.get(var).map(|t| t.value.as_str())
    }

    pub fn vars(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "head": { "link": [], "vars": ["s", "o"] },
        "results": { "distinct": false, "ordered": true, "bindings": [
            { "s": { "type": "uri", "value": "http://dbpedia.org/resource/Heat_(1995_film)" },
              "o": { "type": "uri", "value": "http://dbpedia.org/resource/Michael_Mann" } },
            { "s": { "type": "uri", "value": "http://dbpedia.org/resource/Heat_(1995_film)" },
              "o": { "type": "typed-literal", "value": "170",
                     "datatype": "http://www.w3.org/2001/XMLSchema#integer" } },
            { "s": { "type": "bnode", "value": "b0" },
              "o": { "type": "literal", "value": "Heat", "xml:lang": "en" } }
        ] }
    }"#;

    #[test]
    fn test_parse_virtuoso_results() {
        let results: ResultSet = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(results.vars(), ["s", "o"]);
        assert_eq!(results.len(), 3);

        let first = &results.rows()[0];
        assert_eq!(first.get("o").unwrap().kind, TermKind::Uri);
        assert_eq!(
            first.value("o").unwrap(),
            "http://dbpedia.org/resource/Michael_Mann"
        );

        let second = &results.rows()[1];
        assert!(second.get("o").unwrap().is_literal());
        assert_eq!(
            second.get("o").unwrap().datatype.as_deref(),
            Some("http://www.w3.org/2001/XMLSchema#integer")
        );

        let third = &results.rows()[2];
        assert_eq!(third.get("s").unwrap().kind, TermKind::Bnode);
        assert_eq!(third.get("o").unwrap().lang.as_deref(), Some("en"));
    }

    #[test]
    fn test_parse_empty_results() {
        let results: ResultSet =
            serde_json::from_str(r#"{"head": {"vars": ["s"]}, "results": {"bindings": []}}"#)
                .unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_binding_missing_variable() {
        let row = Binding::default().with("s", Term::uri("http://x"));
        assert!(matches!(row.get("o"), Err(AppError::MissingVariable(v)) if v == "o"));
        assert!(row.get_opt("o").is_none());
    }

    #[test]
    fn test_binding_vars() {
        let row = Binding::default()
            .with("s", Term::uri("http://x"))
            .with("o", Term::literal("y"));
        let mut vars: Vec<_> = row.vars().collect();
        vars.sort();
        assert_eq!(vars, vec!["o", "s"]);
    }
}
