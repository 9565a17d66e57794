//! MST step-trace engine for the spanning-tree visualizer.
//!
//! Given a weighted undirected graph, computes a deterministic, fully
//! materialized sequence of decision events (consider / add / reject /
//! complete) for Prim's, Kruskal's and Reverse-Delete MST construction.
//! The viewer steps through the trace forward and backward; backward is
//! just replaying a shorter prefix, so traces are immutable after creation.
//!
//! Everything here is synchronous and side-effect-free: one call in, one
//! trace out. Rendering, timers and user input live on the JS side of the
//! WASM boundary.

pub mod algorithms;
pub mod graph;
pub mod labels;
pub mod trace;
pub mod union_find;

pub use graph::{Edge, Graph, GraphNode};
pub use trace::{Step, StepKind, Trace};
pub use union_find::UnionFind;

use wasm_bindgen::prelude::*;

/// Module init for WASM builds: route panics to the browser console.
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
