//! Unit tests for trellis-core

use crate::*;

fn graph(adjacency: &[&[u64]]) -> Graph {
    Graph::build("test", adjacency.iter().map(|e| e.to_vec()).collect()).unwrap()
}

#[test]
fn test_parse_well_formed() {
    let g = parse_graph("EX3", "2 3\n3\n\nend").unwrap();
    assert_eq!(g.name(), "EX3");
    assert_eq!(g.node_count(), 3);
    assert_eq!(g.neighbors(NodeId(1)), &[NodeId(2), NodeId(3)]);
    assert_eq!(g.neighbors(NodeId(2)), &[NodeId(3)]);
    // a line with no integers yields a node with zero out-edges
    assert!(g.neighbors(NodeId(3)).is_empty());
}

#[test]
fn test_parse_node_count_is_line_count_minus_terminator() {
    let g = parse_graph("EX5", "2\n3\n4\n5\n1\nend").unwrap();
    assert_eq!(g.node_count(), 5);
    assert_eq!(g.edge_count(), 5);
}

#[test]
fn test_parse_crlf_line_endings() {
    let g = parse_graph("EX2", "2\r\n1\r\nend\r\n").unwrap();
    assert_eq!(g.node_count(), 2);
    assert_eq!(g.neighbors(NodeId(2)), &[NodeId(1)]);
}

#[test]
fn test_parse_edges_keep_line_order() {
    let g = parse_graph("order", "3, then 1 and 2\n\n\nend").unwrap();
    assert_eq!(g.neighbors(NodeId(1)), &[NodeId(3), NodeId(1), NodeId(2)]);
}

#[test]
fn test_parse_missing_terminator() {
    let err = parse_graph("EX1", "2\n1\n").unwrap_err();
    assert_eq!(
        err,
        Error::MissingTerminator {
            file: "EX1".to_string()
        }
    );
}

#[test]
fn test_parse_empty_graph() {
    let g = parse_graph("empty", "end").unwrap();
    assert_eq!(g.node_count(), 0);
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn test_parse_edge_target_out_of_range() {
    let err = parse_graph("EX2", "2\n7\nend").unwrap_err();
    assert_eq!(
        err,
        Error::EdgeOutOfRange {
            line: 2,
            target: 7,
            node_count: 2
        }
    );
}

#[test]
fn test_parse_zero_is_out_of_range() {
    let err = parse_graph("EX1", "0\nend").unwrap_err();
    assert!(matches!(err, Error::EdgeOutOfRange { target: 0, .. }));
}

#[test]
fn test_parse_huge_integer_is_out_of_range() {
    let err = parse_graph("EX1", "99999999999999999999999\nend").unwrap_err();
    assert!(matches!(err, Error::EdgeOutOfRange { .. }));
}

#[test]
fn test_resolve_bounds() {
    let g = graph(&[&[2], &[]]);
    assert_eq!(g.resolve(1).unwrap(), NodeId(1));
    assert_eq!(g.resolve(2).unwrap(), NodeId(2));
    assert!(matches!(g.resolve(0), Err(Error::NodeOutOfRange { .. })));
    assert!(matches!(g.resolve(3), Err(Error::NodeOutOfRange { .. })));
}

#[test]
fn test_out_degree_matches_edge_list() {
    let g = graph(&[&[2, 2, 1], &[]]);
    let first = g.node(NodeId(1)).unwrap();
    assert_eq!(first.out_degree(), 3);
    assert_eq!(first.edges().len(), 3);
}

#[test]
fn test_marker_get_and_set() {
    let g = graph(&[&[], &[], &[]]);
    let mut distances: Marker<usize> = Marker::new(&g);

    assert_eq!(distances.get(NodeId(2)), None);
    assert_eq!(distances.insert(NodeId(2), 7), None);
    assert_eq!(distances.get(NodeId(2)), Some(&7));
    // insert returns the previous value
    assert_eq!(distances.insert(NodeId(2), 3), Some(7));
    assert_eq!(distances.get(NodeId(2)), Some(&3));
}

#[test]
fn test_visited_marks_once() {
    let g = graph(&[&[], &[]]);
    let mut visited = Visited::new(&g);

    assert!(visited.mark(NodeId(1)));
    assert!(!visited.mark(NodeId(1)));
    assert!(visited.contains(NodeId(1)));
    assert!(!visited.contains(NodeId(2)));
}

#[test]
fn test_markers_are_independent_dimensions() {
    let g = graph(&[&[]]);
    let mut visited = Visited::new(&g);
    let mut done = Visited::new(&g);

    visited.mark(NodeId(1));
    assert!(!done.contains(NodeId(1)));
    done.mark(NodeId(1));
    assert!(visited.contains(NodeId(1)));
}
