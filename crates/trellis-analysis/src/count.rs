//! Total node count via exhaustive multi-start traversal.

use std::ops::ControlFlow;

use trellis_core::{Graph, Result, Visited};

use crate::traversal::depth_first_safe;

/// Counts the nodes reachable from at least one start when every node is a
/// start — i.e. the total node count. One visited marker is shared across
/// all starts, and the per-start traversals run strictly one after another
/// so no node is counted twice.
pub fn node_count(graph: &Graph) -> Result<usize> {
    let mut visited = Visited::new(graph);
    let mut count = 0usize;
    for node in graph.nodes() {
        depth_first_safe(graph, node.id, &mut visited, &mut |_| {
            count += 1;
            Ok(ControlFlow::Continue(()))
        })?;
    }
    Ok(count)
}
