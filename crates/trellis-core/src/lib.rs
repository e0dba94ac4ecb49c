//! Trellis Core — graph data model, edge-list parser, and node-keyed markers

pub mod error;
pub mod marker;
pub mod model;
pub mod parse;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use marker::{Marker, Visited};
pub use model::{Graph, Node, NodeId};
pub use parse::{TERMINATOR, parse_graph};
