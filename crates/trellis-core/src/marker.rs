//! Per-node state store backed by an index-addressed array.
//!
//! One `Marker` instance represents one independent state dimension — a
//! visited set, a distance table, a color assignment. Instances are created
//! fresh per algorithm invocation and sized to the graph, so no state leaks
//! between analyses or between files.

use crate::model::{Graph, NodeId};

/// Maps nodes to arbitrary payloads by identity (array position).
#[derive(Debug, Clone)]
pub struct Marker<V> {
    slots: Vec<Option<V>>,
}

impl<V> Marker<V> {
    /// Creates an empty marker sized to the graph's node count.
    pub fn new(graph: &Graph) -> Self {
        let mut slots = Vec::new();
        slots.resize_with(graph.node_count(), || None);
        Marker { slots }
    }

    /// Returns the stored value for a node, if any.
    pub fn get(&self, id: NodeId) -> Option<&V> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    /// Stores a value for a node, returning the previous one. Ids outside
    /// the graph this marker was sized for are ignored.
    pub fn insert(&mut self, id: NodeId, value: V) -> Option<V> {
        match self.slots.get_mut(id.index()) {
            Some(slot) => slot.replace(value),
            None => None,
        }
    }

    /// Whether any value is stored for the node.
    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }
}

/// A marker used purely as a visited set.
pub type Visited = Marker<()>;

impl Marker<()> {
    /// Marks the node, returning `true` if it was previously unmarked.
    pub fn mark(&mut self, id: NodeId) -> bool {
        self.insert(id, ()).is_none()
    }
}
