//! Reachability grouping over the directed graph.

use std::ops::ControlFlow;

use serde::Serialize;
use trellis_core::{Graph, Result, Visited};

use crate::traversal::depth_first_safe;

/// Component count and the size of the largest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Components {
    pub count: usize,
    pub largest: usize,
}

/// Groups nodes by directed out-reachability from each not-yet-visited root
/// in scan order.
///
/// Only forward edges are followed, so this matches true undirected
/// connected components only when the input's edges are symmetric; for
/// asymmetric inputs it reports out-reachability groupings. The scan shares
/// one "done" marker across the per-root traversals and runs them strictly
/// sequentially — a root swallowed by an earlier component counts zero
/// nodes and is skipped rather than double counted.
pub fn connected_components(graph: &Graph) -> Result<Components> {
    let mut done = Visited::new(graph);
    let mut count = 0usize;
    let mut largest = 0usize;
    for node in graph.nodes() {
        let mut size = 0usize;
        depth_first_safe(graph, node.id, &mut done, &mut |_| {
            size += 1;
            Ok(ControlFlow::Continue(()))
        })?;
        if size > 0 {
            count += 1;
            largest = largest.max(size);
        }
    }
    Ok(Components { count, largest })
}
