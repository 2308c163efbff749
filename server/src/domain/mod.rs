//! Domain logic
//!
//! - `catalog` - Listable resources and their associations
//! - `list` - List service layering service-level filters over the grammar

pub mod catalog;
pub mod list;

pub use list::{ListResult, ListService};
