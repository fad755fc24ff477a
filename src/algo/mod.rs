//! Generic algorithms, dispatched over the adjacency capability traits in
//! [`crate::adjacency`] rather than over the concrete graph types —
//! spec.md §9's "dispatch over capability sets", grounded on the
//! teacher's own `Measure`/`FloatMeasure` split in `src/algo/mod.rs`.

mod arborescence;
mod dijkstra;
mod shortest_path;

pub use arborescence::{minimum_tree_reachable_from, minimum_tree_reaching_to};
pub use dijkstra::{shortest_paths_from, shortest_paths_to};
pub use shortest_path::shortest_path;

#[cfg(feature = "rayon")]
pub use shortest_path::parallel_shortest_path;

use core::fmt::Debug;
use core::ops::Add;

/// A weight type usable by the algorithms in this module: totally
/// comparable (for the "totally ordered type" arborescence weights), and
/// summable with a zero (for Dijkstra's accumulated distances).
pub trait Measure: Debug + PartialOrd + Add<Self, Output = Self> + Default + Clone {}

impl<M> Measure for M where M: Debug + PartialOrd + Add<M, Output = M> + Default + Clone {}

/// A [`Measure`] with a well-defined zero and infinity, needed by
/// Dijkstra to seed the source's distance and every other vertex's
/// initial "unreachable" distance.
pub trait FloatMeasure: Measure + Copy {
    /// The additive identity.
    fn zero() -> Self;
    /// A value greater than any finite distance that occurs in practice.
    fn infinite() -> Self;
}

impl FloatMeasure for f32 {
    fn zero() -> Self {
        0.0
    }
    fn infinite() -> Self {
        f32::INFINITY
    }
}

impl FloatMeasure for f64 {
    fn zero() -> Self {
        0.0
    }
    fn infinite() -> Self {
        f64::INFINITY
    }
}
