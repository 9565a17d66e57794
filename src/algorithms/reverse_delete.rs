//! Reverse-Delete algorithm.
//!
//! Starts from the full edge set and walks edges in descending weight
//! order, removing each one whose removal leaves the graph connected.
//! What survives is an MST, by the cycle property: the heaviest edge on any
//! cycle is always safe to drop.
//!
//! The step vocabulary is shared with Prim/Kruskal but inverted here:
//! `reject` marks an edge actually removed, `add` an edge kept because
//! removing it would disconnect the graph. The messages spell this out.

use crate::algorithms::connectivity::is_connected;
use crate::graph::{Edge, GraphNode};
use crate::labels::node_id_to_label;
use crate::trace::{Step, StepKind};

/// Compute the Reverse-Delete step trace.
///
/// The input graph must be connected; the engine does not validate this and
/// a disconnected input produces a meaningless trace (caller's boundary).
///
/// Edges are identified by their position in the input list, so duplicate
/// `(from, to, weight)` triples are unambiguous: a tentative removal always
/// drops exactly the one entry under consideration. The weight-descending
/// order is a stable index sort, keeping re-runs byte-identical.
///
/// The final `complete` step unconditionally references the edge of the
/// last step produced.
///
/// # Panics
/// Panics if `nodes` is non-empty but `edges` is empty: the final
/// `complete` step would have no edge to reference. This precondition
/// violation is reported instead of being papered over with an invented
/// edge. Zero nodes return an empty trace without reaching the check.
pub fn reverse_delete_trace(nodes: &[GraphNode], edges: &[Edge]) -> Vec<Step> {
    let n = nodes.len();
    if n == 0 {
        return Vec::new();
    }
    assert!(
        !edges.is_empty(),
        "reverse-delete requires at least one edge"
    );

    let mut order: Vec<usize> = (0..edges.len()).collect();
    order.sort_by(|&a, &b| edges[b].weight.total_cmp(&edges[a].weight));

    let mut alive = vec![true; edges.len()];
    let mut total_cost: f64 = edges.iter().map(|e| e.weight).sum();
    let mut steps = Vec::new();

    for &idx in &order {
        let edge = edges[idx];

        steps.push(Step {
            kind: StepKind::Consider,
            edge,
            message: format!(
                "Considering removal of edge {}-{} (weight: {})",
                node_id_to_label(edge.from),
                node_id_to_label(edge.to),
                edge.weight
            ),
            total_cost: None,
        });

        // Tentatively drop exactly this entry and probe connectivity.
        alive[idx] = false;
        let candidate: Vec<Edge> = edges
            .iter()
            .zip(&alive)
            .filter_map(|(e, &kept)| kept.then_some(*e))
            .collect();

        if is_connected(n, &candidate) {
            total_cost -= edge.weight;
            steps.push(Step {
                kind: StepKind::Reject,
                edge,
                message: format!(
                    "Removed edge {}-{} (graph stays connected)",
                    node_id_to_label(edge.from),
                    node_id_to_label(edge.to)
                ),
                total_cost: Some(total_cost),
            });
        } else {
            alive[idx] = true;
            steps.push(Step {
                kind: StepKind::Add,
                edge,
                message: format!(
                    "Kept edge {}-{} (removal disconnects graph)",
                    node_id_to_label(edge.from),
                    node_id_to_label(edge.to)
                ),
                total_cost: Some(total_cost),
            });
        }
    }

    // Non-empty edge list guarantees at least one step above.
    let edge = steps[steps.len() - 1].edge;
    steps.push(Step {
        kind: StepKind::Complete,
        edge,
        message: format!("MST complete! Total cost: {total_cost}"),
        total_cost: Some(total_cost),
    });

    steps
}
