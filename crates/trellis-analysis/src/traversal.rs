//! Traversal primitives shared by the analyses.
//!
//! All three strategies take a start node, a visit callback, and a visited
//! marker. A node is marked before its callback runs and is never visited
//! twice, so cycles and shared ancestors are safe. The callback decides
//! whether the traversal keeps going (`ControlFlow::Continue`) or stops
//! early (`ControlFlow::Break`), and may fail; a failed visit aborts this
//! traversal only.

use std::ops::ControlFlow;

use trellis_core::{Graph, NodeId, Result, Visited};

/// Continue/stop decision returned by visit callbacks.
pub type Flow = ControlFlow<()>;

/// Eager recursive depth-first traversal from `start`.
///
/// Recursion depth is bounded by the native call stack, which makes this
/// suitable for small and medium graphs only; use [`depth_first_safe`] when
/// the input may be tens of thousands of nodes deep.
pub fn depth_first<F>(graph: &Graph, start: NodeId, visited: &mut Visited, visit: &mut F) -> Result<Flow>
where
    F: FnMut(NodeId) -> Result<Flow>,
{
    if !visited.mark(start) {
        return Ok(ControlFlow::Continue(()));
    }
    if visit(start)?.is_break() {
        return Ok(ControlFlow::Break(()));
    }
    for &next in graph.neighbors(start) {
        if depth_first(graph, next, visited, visit)?.is_break() {
            return Ok(ControlFlow::Break(()));
        }
    }
    Ok(ControlFlow::Continue(()))
}

/// Stack-safe depth-first traversal from `start`.
///
/// Visits exactly the nodes [`depth_first`] would, but drives the walk with
/// an explicit work stack instead of native recursion, so traversal depth
/// never grows the call stack. Visit order is unspecified.
pub fn depth_first_safe<F>(graph: &Graph, start: NodeId, visited: &mut Visited, visit: &mut F) -> Result<Flow>
where
    F: FnMut(NodeId) -> Result<Flow>,
{
    let mut stack = vec![start];
    while let Some(node) = stack.pop() {
        if !visited.mark(node) {
            continue;
        }
        if visit(node)?.is_break() {
            return Ok(ControlFlow::Break(()));
        }
        for &next in graph.neighbors(node) {
            if !visited.contains(next) {
                stack.push(next);
            }
        }
    }
    Ok(ControlFlow::Continue(()))
}

/// Breadth-first traversal from `start`.
///
/// The whole frontier is drained first — every unmarked neighbor of the
/// node at the read position is marked and enqueued until the frontier is
/// exhausted — and the callback then runs over the queued nodes in enqueue
/// order. Coloring relies on that order being breadth-first from the root.
pub fn breadth_first<F>(graph: &Graph, start: NodeId, visited: &mut Visited, visit: &mut F) -> Result<Flow>
where
    F: FnMut(NodeId) -> Result<Flow>,
{
    if !visited.mark(start) {
        return Ok(ControlFlow::Continue(()));
    }
    let mut frontier = vec![start];
    let mut read = 0;
    while let Some(&node) = frontier.get(read) {
        for &next in graph.neighbors(node) {
            if visited.mark(next) {
                frontier.push(next);
            }
        }
        read += 1;
    }
    for node in frontier {
        if visit(node)?.is_break() {
            return Ok(ControlFlow::Break(()));
        }
    }
    Ok(ControlFlow::Continue(()))
}
