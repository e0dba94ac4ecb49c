//! Per-file result aggregation and rendering.

use serde::Serialize;

use crate::components::Components;
use crate::distance::DistanceReport;

/// Results of the analyses requested for one input file. Unrequested
/// analyses stay `None` and are omitted from JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub graph: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_degree: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Components>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<DistanceReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<u32>,
}

impl FileReport {
    pub fn new(graph: impl Into<String>) -> Self {
        FileReport {
            graph: graph.into(),
            node_count: None,
            max_degree: None,
            components: None,
            distance: None,
            colors: None,
        }
    }

    /// Renders one human-readable line per computed analysis.
    pub fn render_lines(&self) -> Vec<String> {
        let name = &self.graph;
        let mut lines = Vec::new();
        if let Some(count) = self.node_count {
            lines.push(format!("Graph {name} has {count} nodes"));
        }
        if let Some(degree) = self.max_degree {
            lines.push(format!("Max deg. of {name} is {degree}"));
        }
        if let Some(components) = &self.components {
            lines.push(format!(
                "Graph {name} has {} connected component(s)",
                components.count
            ));
            lines.push(format!("The largest has {} nodes", components.largest));
        }
        if let Some(distance) = &self.distance {
            let observed = match distance.distance {
                Some(d) => d.to_string(),
                None => "infinite".to_string(),
            };
            let note = match distance.expected {
                Some(expected) if distance.distance == Some(expected as usize) => {
                    ", as expected".to_string()
                }
                Some(expected) => format!(", but should be {expected}"),
                None => String::new(),
            };
            lines.push(format!(
                "Distance between node {} and {} in {name} is {observed}{note}",
                distance.source, distance.target
            ));
        }
        if let Some(colors) = self.colors {
            lines.push(format!("Coloring of {name} uses {colors} color(s)"));
        }
        lines
    }
}
