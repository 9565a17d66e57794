//! Kruskal's algorithm.
//!
//! Considers edges in ascending weight order, accepting each one that joins
//! two previously separate components and rejecting those that would close
//! a cycle.

use crate::graph::{Edge, GraphNode};
use crate::labels::node_id_to_label;
use crate::trace::{Step, StepKind};
use crate::union_find::UnionFind;

/// Compute the Kruskal's algorithm step trace.
///
/// A copy of the edge list is sorted ascending by weight with a stable sort,
/// so equal-weight edges keep their input order and re-runs are
/// byte-identical. Scanning stops as soon as `n - 1` edges have been
/// accepted; later edges are never even considered. Rejected edges carry
/// the running cost unchanged.
///
/// On a disconnected graph every edge is scanned and the `complete` step
/// simply reports the partial cost accumulated. Zero nodes produce an
/// empty trace.
pub fn kruskal_trace(nodes: &[GraphNode], edges: &[Edge]) -> Vec<Step> {
    let n = nodes.len();
    let mut steps = Vec::new();
    if n == 0 {
        return steps;
    }

    let mut sorted: Vec<Edge> = edges.to_vec();
    sorted.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let mut uf = UnionFind::new(n);
    let mut total_cost = 0.0;
    let mut edges_added = 0;

    for edge in sorted {
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

        if uf.union(edge.from, edge.to) {
            total_cost += edge.weight;
            edges_added += 1;

            steps.push(Step {
                kind: StepKind::Add,
                edge,
                message: format!(
                    "Added edge {}-{} to MST (no cycle)",
                    node_id_to_label(edge.from),
                    node_id_to_label(edge.to)
                ),
                total_cost: Some(total_cost),
            });

            if edges_added == n - 1 {
                break;
            }
        } else {
            steps.push(Step {
                kind: StepKind::Reject,
                edge,
                message: format!(
                    "Rejected edge {}-{} (creates cycle)",
                    node_id_to_label(edge.from),
                    node_id_to_label(edge.to)
                ),
                total_cost: Some(total_cost),
            });
        }
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use crate::trace::mst_edges_at;

    fn make_nodes(count: usize) -> Vec<GraphNode> {
        (0..count)
            .map(|id| GraphNode {
                id,
                x: 0.0,
                y: 0.0,
            })
            .collect()
    }

    fn make_edges(list: &[(usize, usize, f64)]) -> Vec<Edge> {
        list.iter()
            .map(|&(from, to, weight)| Edge { from, to, weight })
            .collect()
    }

    #[test]
    fn test_empty_graph() {
        assert!(kruskal_trace(&[], &[]).is_empty());
    }

    #[test]
    fn test_single_node_no_edges() {
        assert!(kruskal_trace(&make_nodes(1), &[]).is_empty());
    }

    #[test]
    fn test_example_graph_cost_and_edges() {
        let g = Graph::example();
        let steps = kruskal_trace(g.nodes(), g.edge_list());

        let last = steps.last().unwrap();
        assert_eq!(last.kind, StepKind::Complete);
        assert_eq!(last.total_cost, Some(8.0));

        // Acceptance order by weight: B-C=1, B-D=2, D-E=2, A-C=3.
        let members = mst_edges_at(&steps, steps.len());
        assert_eq!(members, vec![(1, 2), (1, 3), (3, 4), (0, 2)]);
    }

    #[test]
    fn test_stops_after_n_minus_one_acceptances() {
        let g = Graph::example();
        let steps = kruskal_trace(g.nodes(), g.edge_list());

        // The 4th acceptance (A-C) ends the scan: the three heavier edges
        // (A-B, C-D, C-E) are never considered, so no reject steps exist.
        assert_eq!(steps.len(), 9);
        assert!(steps.iter().all(|s| s.kind != StepKind::Reject));
        let adds = steps
            .iter()
            .filter(|s| s.kind == StepKind::Add)
            .count();
        assert_eq!(adds, g.node_count() - 1);
    }

    #[test]
    fn test_reject_carries_unchanged_cost() {
        // Triangle plus a tail: 0-2 closes a cycle after 0-1 and 1-2, and
        // the scan keeps going because only 2 of the 3 needed edges exist.
        let edges = make_edges(&[(0, 1, 1.0), (1, 2, 2.0), (0, 2, 3.0), (2, 3, 4.0)]);
        let steps = kruskal_trace(&make_nodes(4), &edges);
        let reject = steps
            .iter()
            .find(|s| s.kind == StepKind::Reject)
            .unwrap();
        assert_eq!((reject.edge.from, reject.edge.to), (0, 2));
        assert_eq!(reject.total_cost, Some(3.0));
        assert_eq!(reject.message, "Rejected edge A-C (creates cycle)");
    }

    #[test]
    fn test_equal_weights_keep_input_order() {
        // Three weight-1 edges; the stable sort preserves list order, so
        // 0-1 and 1-2 are accepted and 0-2 would be the cycle.
        let edges = make_edges(&[(0, 1, 1.0), (1, 2, 1.0), (0, 2, 1.0)]);
        let steps = kruskal_trace(&make_nodes(3), &edges);
        assert_eq!((steps[0].edge.from, steps[0].edge.to), (0, 1));
        assert_eq!((steps[2].edge.from, steps[2].edge.to), (1, 2));
    }

    #[test]
    fn test_disconnected_reports_partial_cost() {
        let edges = make_edges(&[(0, 1, 1.0), (2, 3, 2.0)]);
        let steps = kruskal_trace(&make_nodes(4), &edges);
        let last = steps.last().unwrap();
        assert_eq!(last.kind, StepKind::Complete);
        assert_eq!(last.total_cost, Some(3.0));
    }

    #[test]
    fn test_complete_references_last_step_edge() {
        let g = Graph::example();
        let steps = kruskal_trace(g.nodes(), g.edge_list());
        let last = &steps[steps.len() - 1];
        let previous = &steps[steps.len() - 2];
        assert_eq!(last.edge, previous.edge);
    }

    #[test]
    fn test_matches_prim_total_cost() {
        use crate::algorithms::prim::prim_trace;

        let nodes = make_nodes(6);
        let edges = make_edges(&[
            (0, 1, 7.0),
            (0, 3, 5.0),
            (1, 2, 8.0),
            (1, 3, 9.0),
            (1, 4, 7.0),
            (2, 4, 5.0),
            (3, 4, 15.0),
            (3, 5, 6.0),
            (4, 5, 8.0),
        ]);

        let prim_cost = prim_trace(&nodes, &edges).last().unwrap().total_cost;
        let kruskal_cost = kruskal_trace(&nodes, &edges).last().unwrap().total_cost;
        assert_eq!(prim_cost, kruskal_cost);
        assert_eq!(prim_cost, Some(30.0));
    }

    #[test]
    fn test_deterministic_rerun() {
        let g = Graph::example();
        let a = kruskal_trace(g.nodes(), g.edge_list());
        let b = kruskal_trace(g.nodes(), g.edge_list());
        assert_eq!(a, b);
    }
}
