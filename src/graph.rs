//! Weighted undirected graph container.
//!
//! Owns the node and edge lists the engine consumes and enforces the
//! construction-boundary rules: endpoints in range, no self-loops, duplicate
//! edges allowed as distinct entries. Node positions exist only for layout;
//! no algorithm reads them.

use crate::algorithms::{kruskal, prim, reverse_delete};
use crate::trace::Trace;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use wasm_bindgen::prelude::*;

/// A node: integer identifier plus a display position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: usize,
    pub x: f64,
    pub y: f64,
}

/// An undirected edge between two node identifiers.
///
/// Edges carry no identity beyond the `(from, to, weight)` triple and their
/// position in the edge list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub weight: f64,
}

/// Serializable graph snapshot for import/export.
#[derive(Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<Edge>,
}

// Ring layout used when node positions are generated rather than supplied.
const RING_CENTER_X: f64 = 400.0;
const RING_CENTER_Y: f64 = 300.0;
const RING_RADIUS: f64 = 200.0;

/// The graph the viewer edits and the engine reads.
#[wasm_bindgen]
pub struct Graph {
    nodes: Vec<GraphNode>,
    edges: Vec<Edge>,
}

#[wasm_bindgen]
impl Graph {
    /// Create an empty graph.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Graph {
        Graph {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Create `count` nodes evenly spaced on a circle, first node at
    /// twelve o'clock, with no edges.
    #[wasm_bindgen(js_name = withRingLayout)]
    pub fn with_ring_layout(count: usize) -> Graph {
        Graph {
            nodes: ring_nodes(count),
            edges: Vec::new(),
        }
    }

    /// The default 5-node demo graph shipped with the visualizer.
    /// Its MST has total weight 8.
    pub fn example() -> Graph {
        let mut graph = Graph::with_ring_layout(5);
        for (from, to, weight) in [
            (0, 1, 4.0),
            (0, 2, 3.0),
            (1, 2, 1.0),
            (1, 3, 2.0),
            (2, 3, 4.0),
            (3, 4, 2.0),
            (2, 4, 5.0),
        ] {
            graph.add_edge(from, to, weight);
        }
        graph
    }

    /// Add a node at the given position, returning its identifier.
    #[wasm_bindgen(js_name = addNode)]
    pub fn add_node(&mut self, x: f64, y: f64) -> usize {
        let id = self.nodes.len();
        self.nodes.push(GraphNode { id, x, y });
        id
    }

    /// Add an undirected edge. Returns `false` without modification when an
    /// endpoint is out of range or the edge is a self-loop. Duplicate edges
    /// are permitted and kept as distinct entries.
    #[wasm_bindgen(js_name = addEdge)]
    pub fn add_edge(&mut self, from: usize, to: usize, weight: f64) -> bool {
        if from >= self.nodes.len() || to >= self.nodes.len() || from == to {
            return false;
        }
        self.edges.push(Edge { from, to, weight });
        true
    }

    /// Remove the edge at `index` in the edge list. Returns `false` when the
    /// index is out of range.
    #[wasm_bindgen(js_name = removeEdge)]
    pub fn remove_edge(&mut self, index: usize) -> bool {
        if index >= self.edges.len() {
            return false;
        }
        self.edges.remove(index);
        true
    }

    /// Resize to `count` nodes on a fresh ring layout, dropping edges that
    /// reference removed nodes. The viewer requires at least 2 nodes;
    /// smaller counts are rejected.
    #[wasm_bindgen(js_name = setNodeCount)]
    pub fn set_node_count(&mut self, count: usize) -> bool {
        if count < 2 {
            return false;
        }
        self.nodes = ring_nodes(count);
        self.edges.retain(|e| e.from < count && e.to < count);
        true
    }

    /// Number of nodes.
    #[wasm_bindgen(js_name = nodeCount)]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    #[wasm_bindgen(js_name = edgeCount)]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Node at `id` as a JS object, or null when out of range.
    pub fn node(&self, id: usize) -> JsValue {
        match self.nodes.get(id) {
            Some(node) => serde_wasm_bindgen::to_value(node).unwrap_or(JsValue::NULL),
            None => JsValue::NULL,
        }
    }

    /// All edges as a JS array in input order.
    pub fn edges(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.edges).unwrap_or(JsValue::NULL)
    }

    /// Export graph as JSON snapshot.
    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> String {
        let snapshot = GraphSnapshot {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
        };
        serde_json::to_string(&snapshot).unwrap_or_default()
    }

    /// Import graph from JSON snapshot. Edges are re-validated through
    /// `add_edge`, so a snapshot cannot smuggle in self-loops or dangling
    /// endpoints.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<Graph, JsError> {
        let snapshot: GraphSnapshot =
            serde_json::from_str(json).map_err(|e| JsError::new(&e.to_string()))?;

        let mut graph = Graph::new();
        for node in snapshot.nodes {
            graph.add_node(node.x, node.y);
        }
        for edge in snapshot.edges {
            graph.add_edge(edge.from, edge.to, edge.weight);
        }
        Ok(graph)
    }

    /// Compute the Prim's algorithm trace for the current graph.
    pub fn prim(&self) -> Trace {
        Trace::from_steps(prim::prim_trace(&self.nodes, &self.edges))
    }

    /// Compute the Kruskal's algorithm trace for the current graph.
    pub fn kruskal(&self) -> Trace {
        Trace::from_steps(kruskal::kruskal_trace(&self.nodes, &self.edges))
    }

    /// Compute the Reverse-Delete trace for the current graph.
    ///
    /// The input must be connected with at least one edge; see
    /// [`reverse_delete::reverse_delete_trace`] for the precondition.
    #[wasm_bindgen(js_name = reverseDelete)]
    pub fn reverse_delete(&self) -> Trace {
        Trace::from_steps(reverse_delete::reverse_delete_trace(
            &self.nodes,
            &self.edges,
        ))
    }
}

// Internal methods (not exposed to WASM)
impl Graph {
    /// Node slice (internal use).
    pub(crate) fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    /// Edge slice in input order (internal use).
    pub(crate) fn edge_list(&self) -> &[Edge] {
        &self.edges
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

fn ring_nodes(count: usize) -> Vec<GraphNode> {
    (0..count)
        .map(|i| {
            let angle = 2.0 * PI * i as f64 / count as f64 - PI / 2.0;
            GraphNode {
                id: i,
                x: RING_CENTER_X + RING_RADIUS * angle.cos(),
                y: RING_CENTER_Y + RING_RADIUS * angle.sin(),
            }
        })
        .collect()
}
