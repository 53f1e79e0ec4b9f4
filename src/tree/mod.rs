//! Reconstructed time-log hierarchy and the flat views derived from it.

pub mod node;
pub mod views;

pub use node::{Node, NodeKind};
pub use views::{get_totals, normalize, Story};
