//! Edge records written to the per-property edge lists.

use serde::{Deserialize, Serialize};

/// One `(subject, object)` pair found for a property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub subject: String,
    pub object: String,
}

impl EdgeRecord {
    pub fn new(subject: impl Into<String>, object: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            object: object.into(),
        }
    }
}

/// Edge-list line without the trailing newline: `subject object`.
impl std::fmt::Display for EdgeRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.subject, self.object)
    }
}
