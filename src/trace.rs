//! Step records and the materialized trace.
//!
//! Every algorithm run produces a full ordered sequence of [`Step`]s up
//! front; the viewer then only indexes into it. Rewinding is replaying a
//! shorter prefix, so the trace is never mutated after creation and playback
//! needs no locking or re-computation inside the engine.
//!
//! Memory is O(number of steps), itself O(edges) — fine at visualizer scale.

use crate::graph::Edge;
use serde::Serialize;
use std::collections::HashSet;
use wasm_bindgen::prelude::*;

/// What a step did.
///
/// The vocabulary is shared by all three algorithms, but Reverse-Delete
/// inverts two of the meanings: there `Reject` is "edge removed, graph stays
/// connected" and `Add` is "edge kept because removing it would disconnect
/// the graph". The per-step message spells out the meaning in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Consider,
    Add,
    Reject,
    Complete,
}

/// One decision in an algorithm trace.
///
/// Serializes with the field names the viewer expects: the discriminant as
/// `"type"`, the running cost as `"totalCost"` (omitted on pure `consider`
/// steps, which carry no cost update).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    #[serde(rename = "type")]
    pub kind: StepKind,
    pub edge: Edge,
    pub message: String,
    #[serde(rename = "totalCost", skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
}

/// Canonical endpoint pairs of edges marked `add` within the first `count`
/// steps, deduplicated, in first-marked order.
///
/// This is the viewer's MST-membership replay: stepping backward just means
/// replaying a shorter prefix. Pairs are `(min, max)` so the two directions
/// of an undirected edge collapse to one key. For Reverse-Delete the same
/// replay yields the kept edges, which is what the viewer highlights.
pub fn mst_edges_at(steps: &[Step], count: usize) -> Vec<(usize, usize)> {
    let mut seen: HashSet<(usize, usize)> = HashSet::new();
    let mut members = Vec::new();

    for step in &steps[..count.min(steps.len())] {
        if step.kind == StepKind::Add {
            let key = (
                step.edge.from.min(step.edge.to),
                step.edge.from.max(step.edge.to),
            );
            if seen.insert(key) {
                members.push(key);
            }
        }
    }

    members
}

/// A fully materialized algorithm trace, read-only after creation.
#[wasm_bindgen]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    pub(crate) fn from_steps(steps: Vec<Step>) -> Trace {
        Trace { steps }
    }

    /// All steps in order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}

#[wasm_bindgen]
impl Trace {
    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// `true` if the trace holds no steps (empty or degenerate input).
    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step at `index` as a JS object, or null when out of range.
    pub fn step(&self, index: usize) -> JsValue {
        match self.steps.get(index) {
            Some(step) => serde_wasm_bindgen::to_value(step).unwrap_or(JsValue::NULL),
            None => JsValue::NULL,
        }
    }

    /// MST membership after applying the first `count` steps, as a JSON
    /// array of `[from, to]` pairs.
    #[wasm_bindgen(js_name = mstEdgesAt)]
    pub fn mst_edges_at(&self, count: usize) -> JsValue {
        let members = mst_edges_at(&self.steps, count);
        serde_wasm_bindgen::to_value(&members).unwrap_or(JsValue::NULL)
    }

    /// Running cost carried by the final step, if any. For a complete run
    /// this is the total MST weight reported by the `complete` step.
    #[wasm_bindgen(js_name = finalCost)]
    pub fn final_cost(&self) -> Option<f64> {
        self.steps.last().and_then(|step| step.total_cost)
    }

    /// Export the whole trace as a JSON array.
    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.steps).unwrap_or_default()
    }
}
