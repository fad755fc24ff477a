//! A directed-graph container library built around stable, generation-
//! checked handles rather than pointers or indices into a shared arena.
//!
//! Three adjacency containers trade off which incidence direction(s) they
//! track — [`adjacency::OutAdj`] (outgoing only), [`adjacency::InAdj`]
//! (incoming only), [`adjacency::BiAdj`] (both) — and share one algorithm
//! layer dispatched over the [`adjacency::GraphBase`] /
//! [`adjacency::OutEdges`] / [`adjacency::InEdges`] capability traits.
//! Per-vertex and per-edge data lives outside the graph itself, in dense
//! [`property_map::VertMap`] / [`property_map::EdgeMap`] property maps, so
//! the same graph can carry as many independent annotations as a caller
//! needs without the container itself growing a payload slot.
//!
//! See [`prelude`] for the common set of imports.

pub mod adjacency;
pub mod algo;
mod error;
mod handle;
pub mod prelude;
mod property_map;
mod scored;
mod slot;
mod tree;

pub use adjacency::{BiAdj, InAdj, OutAdj, ReverseBi, ReverseIn, ReverseOut};
pub use error::PreconditionError;
pub use handle::{null_edge, null_vert, E, V};
pub use property_map::{EdgeMap, VertMap, WeightFn};
pub use tree::{InRootedTree, OutRootedTree};
