//! Error surface shared by the core and analysis crates.

use thiserror::Error;

/// Everything that can go wrong while parsing or analyzing a single input
/// file. Errors never cross file boundaries; the caller decides whether a
/// variant is fatal for the whole run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The input file's final line was not the literal terminator token.
    #[error("file {file} didn't end with \"end\"")]
    MissingTerminator { file: String },

    /// A line referenced a node id outside the graph built from the file.
    #[error("line {line}: edge target {target} is outside 1..={node_count}")]
    EdgeOutOfRange {
        line: usize,
        target: u64,
        node_count: usize,
    },

    /// A query parameter (e.g. a shortest-path endpoint) named a node the
    /// graph doesn't have.
    #[error("node id {id} is outside 1..={node_count}")]
    NodeOutOfRange { id: u64, node_count: usize },

    /// No default shortest-path parameters are known for this graph name.
    #[error("no distance parameters known for dataset {0:?}")]
    UnknownDataset(String),

    /// A `--distance` argument that isn't `"source,target"` or
    /// `"source,target,expected"`.
    #[error("distance spec {0:?} is not of the form \"source,target,expected\"")]
    BadDistanceSpec(String),
}

pub type Result<T> = std::result::Result<T, Error>;
