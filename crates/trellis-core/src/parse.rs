//! Parser for the line-oriented edge-list format.
//!
//! Every line except the last describes one node, in order (1-based id =
//! line position). All decimal integers found anywhere in a line are that
//! node's outgoing edges, as 1-based ids, in the order they appear. The
//! final line must be the literal token `end`.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::model::Graph;

/// Required final line of every input file.
pub const TERMINATOR: &str = "end";

fn integers() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+").expect("literal pattern"))
}

/// Parses the full text of an input file into a graph named `name`.
///
/// Both `\n` and `\r\n` line terminators are accepted. A missing terminator
/// token or an out-of-range edge target fails this file only.
pub fn parse_graph(name: &str, text: &str) -> Result<Graph> {
    let mut lines: Vec<&str> = text.lines().collect();
    if lines.pop() != Some(TERMINATOR) {
        return Err(Error::MissingTerminator { file: name.into() });
    }

    let adjacency = lines
        .iter()
        .map(|line| {
            integers()
                .find_iter(line)
                // a digit run too long for u64 is certainly out of range
                .map(|m| m.as_str().parse::<u64>().unwrap_or(u64::MAX))
                .collect()
        })
        .collect();

    let graph = Graph::build(name, adjacency)?;
    tracing::debug!(
        name = graph.name(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "parsed graph"
    );
    Ok(graph)
}
