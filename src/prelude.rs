//! Convenience re-export of the types most call sites need.
//!
//! `use adjgraph::prelude::*;` pulls in the handle types, the three graph
//! containers, and the weight-bound traits, without reaching into
//! `adjgraph::algo`/`adjgraph::adjacency` individually.

pub use crate::adjacency::{BiAdj, GraphBase, InAdj, InEdges, OutAdj, OutEdges};
pub use crate::algo::{FloatMeasure, Measure};
pub use crate::handle::{null_edge, null_vert, E, V};
