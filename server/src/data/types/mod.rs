//! Shared data types
//!
//! Resource descriptors consumed by the list executor and the row type it
//! produces.

mod resource;

pub use resource::{Association, AssociationKind, FullTextIndex, RecordRow, Resource};
