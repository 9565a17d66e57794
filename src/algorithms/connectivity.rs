//! Connectivity oracle.
//!
//! Answers "does this edge subset still span all nodes?" for Reverse-Delete.
//! Purely observational: builds its own adjacency and never mutates the
//! input.

use crate::graph::Edge;
use std::collections::VecDeque;

/// `true` iff the given edges connect all `node_count` nodes.
///
/// Fast path: fewer than `node_count - 1` edges cannot span the graph, so
/// no traversal is attempted. Otherwise a BFS from node 0 over the
/// undirected adjacency counts reachable nodes. Zero nodes are vacuously
/// connected.
///
/// Edge endpoints must be valid indices below `node_count`.
pub fn is_connected(node_count: usize, edges: &[Edge]) -> bool {
    if node_count == 0 {
        return true;
    }
    // A spanning structure needs at least n - 1 edges.
    if edges.len() + 1 < node_count {
        return false;
    }

    let mut adj: Vec<Vec<usize>> = vec![Vec::new(); node_count];
    for edge in edges {
        adj[edge.from].push(edge.to);
        adj[edge.to].push(edge.from);
    }

    let mut visited = vec![false; node_count];
    let mut reached = 1;
    let mut queue = VecDeque::new();
    visited[0] = true;
    queue.push_back(0);

    while let Some(v) = queue.pop_front() {
        for &w in &adj[v] {
            if !visited[w] {
                visited[w] = true;
                reached += 1;
                queue.push_back(w);
            }
        }
    }

    reached == node_count
}
