//! Core data structures for parsed graphs.

use std::fmt;

use crate::error::{Error, Result};

/// 1-based node identifier, assigned by input line order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Position of this node in the graph's node array.
    pub fn index(self) -> usize {
        self.0 as usize - 1
    }

    pub(crate) fn from_index(index: usize) -> Self {
        NodeId(index as u32 + 1)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single node: its id plus outgoing edges in input order.
///
/// Edges are ids of sibling nodes in the same graph; the graph owns all
/// nodes, edges carry no ownership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    edges: Vec<NodeId>,
}

impl Node {
    /// Outgoing edge targets, in the order they appeared on the input line.
    pub fn edges(&self) -> &[NodeId] {
        &self.edges
    }

    /// Length of the outgoing edge list.
    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }
}

/// A parsed graph: an insertion-ordered node array plus a name derived from
/// the source file. Read-only after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    name: String,
    nodes: Vec<Node>,
}

impl Graph {
    /// Builds a graph from per-node target lists of 1-based ids.
    ///
    /// The node count is fixed by `adjacency.len()`; every target must fall
    /// in `1..=node_count` or construction fails with the offending line.
    pub fn build(name: impl Into<String>, adjacency: Vec<Vec<u64>>) -> Result<Self> {
        let node_count = adjacency.len();
        let mut nodes = Vec::with_capacity(node_count);
        for (index, targets) in adjacency.into_iter().enumerate() {
            let mut edges = Vec::with_capacity(targets.len());
            for target in targets {
                if target == 0 || target > node_count as u64 {
                    return Err(Error::EdgeOutOfRange {
                        line: index + 1,
                        target,
                        node_count,
                    });
                }
                edges.push(NodeId(target as u32));
            }
            nodes.push(Node {
                id: NodeId::from_index(index),
                edges,
            });
        }
        Ok(Graph {
            name: name.into(),
            nodes,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of edges (sum of out-degrees).
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(Node::out_degree).sum()
    }

    /// Get a node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Outgoing edge targets of a node; empty for an unknown id.
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map_or(&[], Node::edges)
    }

    /// Iterate over all nodes in input order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Resolve a raw 1-based id against this graph.
    pub fn resolve(&self, id: u64) -> Result<NodeId> {
        if id == 0 || id > self.node_count() as u64 {
            return Err(Error::NodeOutOfRange {
                id,
                node_count: self.node_count(),
            });
        }
        Ok(NodeId(id as u32))
    }
}
