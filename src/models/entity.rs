//! Entity model: the graph nodes whose outgoing edges are extracted.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// An entity URI, e.g. `http://dbpedia.org/resource/Alien_(film)`.
///
/// Opaque to the pipeline; only ever compared and embedded in queries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entity(String);

impl Entity {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The entity as an IRI term for query text: `<uri>`.
    pub fn iri(&self) -> String {
        format!("<{}>", self.0)
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Entity {
    fn from(uri: &str) -> Self {
        Self::new(uri)
    }
}

impl From<String> for Entity {
    fn from(uri: String) -> Self {
        Self(uri)
    }
}

/// A deduplicated list of entities.
///
/// Duplicates are dropped on insertion; the first occurrence keeps its
/// position so iteration order is reproducible between runs.
#[derive(Debug, Clone, Default)]
pub struct EntityList {
    entities: Vec<Entity>,
    seen: HashSet<Entity>,
}

impl EntityList {
    /// Reads an entity file: one space-separated record per line, the second
    /// token being the entity URI (`<user> <uri> <rating> ...`).
    ///
    /// Blank lines are skipped. A non-blank line without a second token is an
    /// error.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text).map_err(|(line, message)| AppError::EntityFile {
            path: path.to_path_buf(),
            line,
            message,
        })
    }

    /// Parses entity records, returning the 1-based line number and reason on
    /// failure.
    pub fn parse(text: &str) -> Result<Self, (usize, String)> {
        let mut list = Self::default();
        for (idx, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match line.split(' ').nth(1).filter(|uri| !uri.is_empty()) {
                Some(uri) => list.push(Entity::new(uri)),
                None => return Err((idx + 1, format!("missing entity column in {:?}", line))),
            }
        }
        Ok(list)
    }

    /// Appends an entity unless it is already present.
    pub fn push(&mut self, entity: Entity) {
        if self.seen.insert(entity.clone()) {
            self.entities.push(entity);
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.entities.iter()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl FromIterator<Entity> for EntityList {
    fn from_iter<I: IntoIterator<Item = Entity>>(iter: I) -> Self {
        let mut list = Self::default();
        for entity in iter {
            list.push(entity);
        }
        list
    }
}

impl<'a> IntoIterator for &'a EntityList {
    type Item = &'a Entity;
    type IntoIter = std::slice::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_takes_second_column() {
        let list = EntityList::parse(
            "1 http://dbpedia.org/resource/Alien 5 0\n2 http://dbpedia.org/resource/Heat 3 0\n",
        )
        .unwrap();
        let uris: Vec<_> = list.iter().map(Entity::as_str).collect();
        assert_eq!(
            uris,
            vec![
                "http://dbpedia.org/resource/Alien",
                "http://dbpedia.org/resource/Heat"
            ]
        );
    }

    #[test]
    fn test_parse_deduplicates_keeping_first_position() {
        let list = EntityList::parse("1 b 5\n2 a 4\n3 b 1\n4 c 2\n").unwrap();
        let uris: Vec<_> = list.iter().map(Entity::as_str).collect();
        assert_eq!(uris, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let list = EntityList::parse("\n1 a 5\n   \n").unwrap();
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_parse_rejects_short_line() {
        let err = EntityList::parse("1 a 5\nbroken\n").unwrap_err();
        assert_eq!(err.0, 2);
    }

    #[test]
    fn test_from_iterator_deduplicates() {
        let list: EntityList = ["x", "y", "x"].into_iter().map(Entity::from).collect();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_iri_wraps_in_angle_brackets() {
        let entity = Entity::new("http://dbpedia.org/resource/Heat");
        assert_eq!(entity.iri(), "<http://dbpedia.org/resource/Heat>");
    }
}
