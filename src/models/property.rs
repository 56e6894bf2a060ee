//! Property model: the predicates whose subgraphs are extracted.

use serde::{Deserialize, Serialize};

/// Reserved property that is never queried nor written.
pub const FEEDBACK_PROPERTY: &str = "feedback";

/// Subject-classification property appended to every discovered list.
pub const SUBJECT_PROPERTY: &str = "dct:subject";

/// A predicate identifier: a prefixed name such as `dct:subject` or a full
/// URI such as `http://dbpedia.org/ontology/director`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Property(String);

impl Property {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File-system safe name: the part after the last `/`, or the whole
    /// identifier when it has none.
    pub fn short_name(&self) -> &str {
        match self.0.rsplit_once('/') {
            Some((_, tail)) => tail,
            None => &self.0,
        }
    }

    /// The property as it appears in query text. URIs are wrapped in angle
    /// brackets, prefixed names are used verbatim.
    pub fn query_term(&self) -> String {
        if self.is_uri() {
            format!("<{}>", self.0)
        } else {
            self.0.clone()
        }
    }

    /// True for absolute `http://` or `https://` URIs. Prefixed names whose
    /// prefix merely starts with `http` (`httpvoc:label`) are not URIs.
    pub fn is_uri(&self) -> bool {
        self.0.starts_with("http://") || self.0.starts_with("https://")
    }

    pub fn is_feedback(&self) -> bool {
        self.0 == FEEDBACK_PROPERTY
    }
}

impl std::fmt::Display for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Property {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for Property {
    fn from(id: String) -> Self {
        Self(id)
    }
}
