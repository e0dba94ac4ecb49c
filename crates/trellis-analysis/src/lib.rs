//! Trellis Analysis — traversal primitives and the structural metrics
//! computed over parsed graphs.

pub mod coloring;
pub mod components;
pub mod count;
pub mod degree;
pub mod distance;
pub mod report;
pub mod traversal;


pub use coloring::{Coloring, greedy_coloring};
pub use components::{Components, connected_components};
pub use count::node_count;
pub use degree::max_degree;
pub use distance::{DATASETS, DistanceParams, DistanceReport, shortest_path};
pub use report::FileReport;
pub use traversal::{breadth_first, depth_first, depth_first_safe};
