//! Prim's algorithm.
//!
//! Grows a tree from node 0, repeatedly taking the cheapest edge that
//! crosses the cut between visited and unvisited nodes.

use crate::graph::{Edge, GraphNode};
use crate::labels::node_id_to_label;
use crate::trace::{Step, StepKind};

/// Compute the Prim's algorithm step trace.
///
/// Each round scans the full edge list in input order for the minimum-weight
/// cut edge (exactly one endpoint visited). Ties keep the first edge
/// encountered — the strict `<` comparison is what makes re-runs
/// byte-identical, so it must stay a stable linear scan.
///
/// If the graph is disconnected the loop stops at the component reachable
/// from node 0 and the trace is partial; the `complete` step is appended
/// only when at least one edge was added. Zero nodes produce an empty trace.
pub fn prim_trace(nodes: &[GraphNode], edges: &[Edge]) -> Vec<Step> {
    let n = nodes.len();
    let mut steps = Vec::new();
    if n == 0 {
        return steps;
    }

    let mut visited = vec![false; n];
    let mut visited_count = 1;
    let mut total_cost = 0.0;
    visited[0] = true;

    while visited_count < n {
        // Stable linear scan for the cheapest cut edge.
        let mut min_edge: Option<&Edge> = None;
        for edge in edges {
            if visited[edge.from] != visited[edge.to] {
                match min_edge {
                    Some(best) if edge.weight >= best.weight => {}
                    _ => min_edge = Some(edge),
                }
            }
        }

        // No cut edge: the rest of the graph is unreachable from node 0.
        let Some(&edge) = min_edge else { break };

        steps.push(Step {
            kind: StepKind::Consider,
            edge,
            message: format!(
                "Considering edge {}-{} (weight: {})",
                node_id_to_label(edge.from),
                node_id_to_label(edge.to),
                edge.weight
            ),
            total_cost: None,
        });

        total_cost += edge.weight;
        for endpoint in [edge.from, edge.to] {
            if !visited[endpoint] {
                visited[endpoint] = true;
                visited_count += 1;
            }
        }

        steps.push(Step {
            kind: StepKind::Add,
            edge,
            message: format!(
                "Added edge {}-{} to MST",
                node_id_to_label(edge.from),
                node_id_to_label(edge.to)
            ),
            total_cost: Some(total_cost),
        });
    }

    if let Some(last) = steps.last() {
        let edge = last.edge;
        steps.push(Step {
            kind: StepKind::Complete,
            edge,
            message: format!("MST complete! Total cost: {total_cost}"),
            total_cost: Some(total_cost),
        });
    }

    steps
}
