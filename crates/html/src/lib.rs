//! Minimal in-memory DOM: element tree, attribute and class-list helpers,
//! traversal queries, and markup serialization.

pub mod dom_utils;
#[cfg(any(test, feature = "dom-snapshot"))]
pub mod dom_snapshot;
pub mod serialize;
pub mod traverse;

mod types;

pub use crate::serialize::to_html;
pub use crate::types::{Id, Node, NodeId};
