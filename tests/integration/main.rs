//! Integration tests for Trellis
//!
//! These tests exercise the whole pipeline: input files on disk, parsing,
//! the analyses, and the rendered result lines.

use std::fs;
use std::process::Command;

use tempfile::TempDir;

use trellis_analysis::{
    DistanceParams, DistanceReport, FileReport, connected_components, greedy_coloring, max_degree,
    node_count, shortest_path,
};
use trellis_core::parse_graph;

/// Ten nodes forming one chain 1..=10 with a back-edge and a detour; the
/// shortest path from 6 to 10 runs 6 -> 7 -> 10.
const EX10: &str = "2\n3\n4 1\n5\n6\n7\n10 8\n9\n10\n\nend";

#[test]
fn test_ex10_distance_scenario() {
    let graph = parse_graph("EX10", EX10).unwrap();
    assert_eq!(graph.node_count(), 10);

    let params = DistanceParams::for_dataset("EX10").unwrap();
    let source = graph.resolve(params.source).unwrap();
    let target = graph.resolve(params.target).unwrap();

    let mut report = FileReport::new(graph.name());
    report.distance = Some(DistanceReport {
        source: params.source,
        target: params.target,
        distance: shortest_path(&graph, source, target),
        expected: params.expected,
    });
    assert_eq!(
        report.render_lines(),
        vec!["Distance between node 6 and 10 in EX10 is 2, as expected"]
    );
}

#[test]
fn test_two_node_cycle_scenario() {
    // node 1 points to node 2, node 2 points to node 1
    let graph = parse_graph("EX2", "2\n1\nend").unwrap();

    assert_eq!(node_count(&graph).unwrap(), 2);
    assert_eq!(max_degree(&graph), 1);
    let components = connected_components(&graph).unwrap();
    assert_eq!(components.count, 1);
    assert_eq!(components.largest, 2);
    assert_eq!(greedy_coloring(&graph).unwrap().max_color, 2);
}

#[test]
fn test_cli_invocation() {
    let output = Command::new("cargo")
        .args(["run", "--", "--help"])
        .current_dir(".")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("trellis"));
    assert!(stdout.contains("Count the total number of nodes"));
    assert!(stdout.contains("shortest path"));
}

#[test]
fn test_cli_directory_run_isolates_bad_files() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::write(root.join("EX2.txt"), "2\n1\nend").unwrap();
    // missing terminator: this file must fail without affecting EX2
    fs::write(root.join("EX3.txt"), "2\n3\n1\n").unwrap();
    // doesn't match the EX<digits>.txt pattern: skipped entirely
    fs::write(root.join("notes.txt"), "not a graph").unwrap();

    let output = Command::new("cargo")
        .args(["run", "--quiet", "--", "-n", "-d", "-c"])
        .arg(root)
        .current_dir(".")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Graph EX2 has 2 nodes"));
    assert!(stdout.contains("Max deg. of EX2 is 1"));
    assert!(stdout.contains("Graph EX2 has 1 connected component(s)"));
    assert!(stdout.contains("The largest has 2 nodes"));
    assert!(!stdout.contains("EX3"));
}

#[test]
fn test_cli_missing_source_is_fatal() {
    let output = Command::new("cargo")
        .args(["run", "--quiet", "--", "-n", "./no-such-input"])
        .current_dir(".")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
}

#[test]
fn test_cli_json_output() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("EX2.txt"), "2\n1\nend").unwrap();

    let output = Command::new("cargo")
        .args(["run", "--quiet", "--", "--degree", "--json"])
        .arg(temp_dir.path())
        .current_dir(".")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(r#"{"graph":"EX2","max_degree":1}"#));
}
