//! Domain models for property subgraph extraction.

mod edge;
mod entity;
mod property;

pub use edge::EdgeRecord;
pub use entity::{Entity, EntityList};
pub use property::{Property, FEEDBACK_PROPERTY, SUBJECT_PROPERTY};
