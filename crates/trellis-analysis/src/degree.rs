//! Maximum out-degree.

use trellis_core::{Graph, Node};

/// The maximum out-edge-list length across all nodes; 0 for an empty graph.
/// Pure reduction, no traversal.
pub fn max_degree(graph: &Graph) -> usize {
    graph.nodes().map(Node::out_degree).max().unwrap_or(0)
}
