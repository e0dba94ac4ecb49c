//! Single-source shortest path with unit edge cost.

use serde::Serialize;
use trellis_core::{Error, Graph, Marker, NodeId, Result, Visited};

/// Default `(source, target, expected)` parameters for the known datasets,
/// keyed by graph name.
pub const DATASETS: &[(&str, (u64, u64, u64))] = &[
    ("EX10", (6, 10, 2)),
    ("EX100", (14, 45, 5)),
    ("EX2500", (533, 895, 4)),
    ("EX24900", (4422, 23561, 17)),
    ("EX25100", (22710, 23942, 18)),
];

/// Shortest-path query parameters: raw 1-based endpoint ids plus an
/// optional externally supplied expected distance, used purely for the
/// observed-vs-expected note in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistanceParams {
    pub source: u64,
    pub target: u64,
    pub expected: Option<u64>,
}

impl DistanceParams {
    /// Parses a `"source,target"` or `"source,target,expected"` spec.
    pub fn from_spec(spec: &str) -> Result<Self> {
        let bad = || Error::BadDistanceSpec(spec.to_string());
        let fields: Vec<&str> = spec.split(',').map(str::trim).collect();
        let (source, target, expected) = match fields.as_slice() {
            [v, w] => (v, w, None),
            [v, w, e] => (v, w, Some(e.parse().map_err(|_| bad())?)),
            _ => return Err(bad()),
        };
        Ok(DistanceParams {
            source: source.parse().map_err(|_| bad())?,
            target: target.parse().map_err(|_| bad())?,
            expected,
        })
    }

    /// Looks up the default parameters for a named dataset.
    pub fn for_dataset(name: &str) -> Result<Self> {
        DATASETS
            .iter()
            .find(|(dataset, _)| *dataset == name)
            .map(|&(_, (source, target, expected))| DistanceParams {
                source,
                target,
                expected: Some(expected),
            })
            .ok_or_else(|| Error::UnknownDataset(name.to_string()))
    }
}

/// Outcome of one shortest-path query. `distance` is `None` when the
/// target is unreachable from the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DistanceReport {
    pub source: u64,
    pub target: u64,
    pub distance: Option<usize>,
    pub expected: Option<u64>,
}

/// Computes the minimum hop count from `source` to `target`, relaxing
/// distances to every reachable node along the way.
///
/// Label-correcting loop: among the not-yet-done nodes, pick the one with
/// the minimum recorded distance (unrecorded = infinity), relax its
/// neighbors to `distance + 1`, mark it done; terminate once no undone node
/// has a finite distance. The linear minimum scan makes this O(n²) per
/// query, fine at the dataset sizes this tool targets; a binary-heap
/// frontier would be the meaning-preserving upgrade for larger graphs.
pub fn shortest_path(graph: &Graph, source: NodeId, target: NodeId) -> Option<usize> {
    let mut distance: Marker<usize> = Marker::new(graph);
    let mut done = Visited::new(graph);
    distance.insert(source, 0);

    loop {
        let mut nearest: Option<(NodeId, usize)> = None;
        for node in graph.nodes() {
            if done.contains(node.id) {
                continue;
            }
            if let Some(&d) = distance.get(node.id) {
                if nearest.is_none_or(|(_, best)| d < best) {
                    nearest = Some((node.id, d));
                }
            }
        }
        // only unreachable (infinite) nodes are left undone
        let Some((node, d)) = nearest else { break };

        for &next in graph.neighbors(node) {
            let relaxed = d + 1;
            if distance.get(next).is_none_or(|&current| current > relaxed) {
                distance.insert(next, relaxed);
            }
        }
        done.mark(node);
    }

    distance.get(target).copied()
}
