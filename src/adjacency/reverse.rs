//! `reverse_view()`: zero-copy adaptors that swap `tail`/`head` and
//! redirect `out_edges`/`in_edges`, per spec.md §4.4's capability
//! translation table.
//!
//! Grounded on the borrowing-adaptor pattern in the teacher's
//! `crates/core/src/storage/reverse.rs` / `crates/core/src/graph/reverse.rs`:
//! a thin wrapper that holds a reference to the underlying graph and
//! relabels direction at the call site, with no copying and no mutation
//! surface (spec.md: "The view is read-only ... in this core").

use super::{BiAdj, GraphBase, InAdj, InEdges, OutAdj, OutEdges};
use crate::handle::{E, V};
use crate::property_map::{EdgeMap, VertMap};

/// `OutAdj` viewed as its in-adjacency dual.
pub struct ReverseOut<'a> {
    inner: &'a OutAdj,
}

impl<'a> ReverseOut<'a> {
    pub(crate) fn new(inner: &'a OutAdj) -> Self {
        ReverseOut { inner }
    }
}

impl<'a> GraphBase for ReverseOut<'a> {
    type VertIter<'b> = <OutAdj as GraphBase>::VertIter<'b> where Self: 'b;
    type EdgeIter<'b> = <OutAdj as GraphBase>::EdgeIter<'b> where Self: 'b;

    fn order(&self) -> usize {
        self.inner.order()
    }
    fn size(&self) -> usize {
        self.inner.size()
    }
    fn tail(&self, e: E) -> V {
        self.inner.head(e)
    }
    fn head(&self, e: E) -> V {
        self.inner.tail(e)
    }
    fn verts(&self) -> Self::VertIter<'_> {
        self.inner.verts()
    }
    fn edges(&self) -> Self::EdgeIter<'_> {
        self.inner.edges()
    }
    fn vert_map<T: Clone>(&self, default: T) -> VertMap<T> {
        self.inner.vert_map(default)
    }
    fn edge_map<T: Clone>(&self, default: T) -> EdgeMap<T> {
        self.inner.edge_map(default)
    }
}

impl<'a> InEdges for ReverseOut<'a> {
    type InEdgeIter<'b> = <OutAdj as OutEdges>::OutEdgeIter<'b> where Self: 'b;

    fn in_edges(&self, v: V) -> Self::InEdgeIter<'_> {
        self.inner.out_edges(v)
    }
}

/// `InAdj` viewed as its out-adjacency dual.
pub struct ReverseIn<'a> {
    inner: &'a InAdj,
}

impl<'a> ReverseIn<'a> {
    pub(crate) fn new(inner: &'a InAdj) -> Self {
        ReverseIn { inner }
    }
}

impl<'a> GraphBase for ReverseIn<'a> {
    type VertIter<'b> = <InAdj as GraphBase>::VertIter<'b> where Self: 'b;
    type EdgeIter<'b> = <InAdj as GraphBase>::EdgeIter<'b> where Self: 'b;

    fn order(&self) -> usize {
        self.inner.order()
    }
    fn size(&self) -> usize {
        self.inner.size()
    }
    fn tail(&self, e: E) -> V {
        self.inner.head(e)
    }
    fn head(&self, e: E) -> V {
        self.inner.tail(e)
    }
    fn verts(&self) -> Self::VertIter<'_> {
        self.inner.verts()
    }
    fn edges(&self) -> Self::EdgeIter<'_> {
        self.inner.edges()
    }
    fn vert_map<T: Clone>(&self, default: T) -> VertMap<T> {
        self.inner.vert_map(default)
    }
    fn edge_map<T: Clone>(&self, default: T) -> EdgeMap<T> {
        self.inner.edge_map(default)
    }
}

impl<'a> OutEdges for ReverseIn<'a> {
    type OutEdgeIter<'b> = <InAdj as InEdges>::InEdgeIter<'b> where Self: 'b;

    fn out_edges(&self, v: V) -> Self::OutEdgeIter<'_> {
        self.inner.in_edges(v)
    }
}

/// `BiAdj` viewed with both directions swapped.
pub struct ReverseBi<'a> {
    inner: &'a BiAdj,
}

impl<'a> ReverseBi<'a> {
    pub(crate) fn new(inner: &'a BiAdj) -> Self {
        ReverseBi { inner }
    }
}

impl<'a> GraphBase for ReverseBi<'a> {
    type VertIter<'b> = <BiAdj as GraphBase>::VertIter<'b> where Self: 'b;
    type EdgeIter<'b> = <BiAdj as GraphBase>::EdgeIter<'b> where Self: 'b;

    fn order(&self) -> usize {
        self.inner.order()
    }
    fn size(&self) -> usize {
        self.inner.size()
    }
    fn tail(&self, e: E) -> V {
        self.inner.head(e)
    }
    fn head(&self, e: E) -> V {
        self.inner.tail(e)
    }
    fn verts(&self) -> Self::VertIter<'_> {
        self.inner.verts()
    }
    fn edges(&self) -> Self::EdgeIter<'_> {
        self.inner.edges()
    }
    fn vert_map<T: Clone>(&self, default: T) -> VertMap<T> {
        self.inner.vert_map(default)
    }
    fn edge_map<T: Clone>(&self, default: T) -> EdgeMap<T> {
        self.inner.edge_map(default)
    }
}

impl<'a> OutEdges for ReverseBi<'a> {
    type OutEdgeIter<'b> = <BiAdj as InEdges>::InEdgeIter<'b> where Self: 'b;

    fn out_edges(&self, v: V) -> Self::OutEdgeIter<'_> {
        self.inner.in_edges(v)
    }
}

impl<'a> InEdges for ReverseBi<'a> {
    type InEdgeIter<'b> = <BiAdj as OutEdges>::OutEdgeIter<'b> where Self: 'b;

    fn in_edges(&self, v: V) -> Self::InEdgeIter<'_> {
        self.inner.out_edges(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjacency::OutAdj;

    #[test]
    fn reverse_view_swaps_tail_and_head() {
        let mut g = OutAdj::new();
        let s = g.insert_vert();
        let t = g.insert_vert();
        let e = g.insert_edge(s, t);
        let r = g.reverse_view();
        assert_eq!(r.tail(e), t);
        assert_eq!(r.head(e), s);
    }

    #[test]
    fn reverse_view_in_edges_matches_original_out_edges() {
        let mut g = OutAdj::new();
        let a = g.insert_vert();
        let b = g.insert_vert();
        let c = g.insert_vert();
        g.insert_edge(a, b);
        g.insert_edge(a, c);
        let r = g.reverse_view();
        let via_view: std::collections::HashSet<_> = r.in_edges(a).collect();
        let via_original: std::collections::HashSet<_> = g.out_edges(a).collect();
        assert_eq!(via_view, via_original);
    }
}
