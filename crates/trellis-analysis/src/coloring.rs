//! Greedy vertex coloring from the highest-degree node.

use std::ops::ControlFlow;

use trellis_core::{Graph, Marker, NodeId, Result, Visited};

use crate::traversal::breadth_first;

/// A greedy color assignment. Colors are drawn from `1..=max_color` with no
/// gaps; nodes unreachable from the coloring root stay uncolored.
#[derive(Debug)]
pub struct Coloring {
    pub max_color: u32,
    colors: Marker<u32>,
}

impl Coloring {
    /// The color assigned to a node, if it was reached.
    pub fn color(&self, id: NodeId) -> Option<u32> {
        self.colors.get(id).copied()
    }
}

/// Colors the graph greedily, reporting the chromatic upper bound.
///
/// The first node with the maximum out-degree becomes the root, gets color
/// 1, and the graph is walked breadth-first from there. Each visited node
/// takes the smallest positive color not already assigned to one of its
/// direct outgoing neighbors; uncolored neighbors contribute no constraint.
/// Only forward edges constrain and only root-reachable nodes are colored,
/// so this is a heuristic upper bound over directed edges, not a proper
/// symmetric-graph coloring guarantee.
pub fn greedy_coloring(graph: &Graph) -> Result<Coloring> {
    let mut root = None;
    for node in graph.nodes() {
        let better = match root {
            None => true,
            Some(best) => node.out_degree() > graph.neighbors(best).len(),
        };
        if better {
            root = Some(node.id);
        }
    }
    let Some(root) = root else {
        return Ok(Coloring {
            max_color: 0,
            colors: Marker::new(graph),
        });
    };
    tracing::debug!(graph = graph.name(), root = %root, "coloring root selected");

    let mut colors: Marker<u32> = Marker::new(graph);
    colors.insert(root, 1);
    let mut max_color = 1u32;

    let mut visited = Visited::new(graph);
    breadth_first(graph, root, &mut visited, &mut |node| {
        let mut taken: Vec<u32> = graph
            .neighbors(node)
            .iter()
            .filter_map(|&next| colors.get(next).copied())
            .collect();
        taken.sort_unstable();

        // smallest positive color absent from the sorted neighbor colors
        let mut color = 1u32;
        for &t in &taken {
            if t == color {
                color += 1;
            } else if t > color {
                break;
            }
        }

        colors.insert(node, color);
        max_color = max_color.max(color);
        Ok(ControlFlow::Continue(()))
    })?;

    Ok(Coloring { max_color, colors })
}
