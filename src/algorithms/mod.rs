//! MST algorithm implementations.
//!
//! Each algorithm is a pure function from `(nodes, edges)` to a fully
//! materialized step trace. The WASM surface in [`crate::graph`] is a thin
//! wrapper over these.

pub mod connectivity;
pub mod kruskal;
pub mod prim;
pub mod reverse_delete;
