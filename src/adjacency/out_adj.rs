//! `OutAdj`: tracks outgoing incidence only.

use rand::RngCore;
use tracing::trace;

use super::{EdgeSlotIter, GraphBase, IncidenceIter, OutEdges, ReverseOut, VertSlotIter};
use crate::error::{require, PreconditionError};
use crate::handle::{E, V};
use crate::property_map::{EdgeMap, VertMap};
use crate::slot::SlotTable;

struct VertData {
    out: Vec<E>,
}

struct EdgeData {
    tail: V,
    head: V,
    out_pos: u32,
}

/// A directed graph that stores, per vertex, its outgoing incidence list.
///
/// `out_edges(v)` runs in `O(deg_out(v))`; `in_edges` is not provided (use
/// [`crate::adjacency::BiAdj`] if both directions are needed).
#[derive(Default)]
pub struct OutAdj {
    verts: SlotTable<VertData>,
    edges: SlotTable<EdgeData>,
}

impl OutAdj {
    /// An empty graph.
    #[must_use]
    pub fn new() -> Self {
        OutAdj {
            verts: SlotTable::new(),
            edges: SlotTable::new(),
        }
    }

    /// An empty graph with pre-reserved storage for `verts`/`edges`
    /// insertions.
    #[must_use]
    pub fn with_capacity(verts: usize, edges: usize) -> Self {
        OutAdj {
            verts: SlotTable::with_capacity(verts),
            edges: SlotTable::with_capacity(edges),
        }
    }

    /// Adds a vertex with no incident edges. O(1) amortised.
    pub fn insert_vert(&mut self) -> V {
        let (index, generation) = self.verts.insert(VertData { out: Vec::new() });
        V::new(index, generation)
    }

    /// Adds an edge `s -> t`. Self-loops and parallel edges are allowed.
    /// O(1) amortised.
    ///
    /// # Panics
    /// In `checked` builds, panics if `s` or `t` is not currently valid.
    pub fn insert_edge(&mut self, s: V, t: V) -> E {
        require(self.verts.get(s.index, s.generation).is_some(), || {
            PreconditionError::UseAfterErase {
                handle: format!("{s:?}"),
            }
        });
        require(self.verts.get(t.index, t.generation).is_some(), || {
            PreconditionError::UseAfterErase {
                handle: format!("{t:?}"),
            }
        });

        let out_pos = self.verts.get(s.index, s.generation).unwrap().out.len() as u32;
        let (index, generation) = self.edges.insert(EdgeData {
            tail: s,
            head: t,
            out_pos,
        });
        let e = E::new(index, generation);
        self.verts
            .get_mut(s.index, s.generation)
            .unwrap()
            .out
            .push(e);
        trace!(?s, ?t, ?e, "insert_edge");
        e
    }

    /// Removes `e`. O(1) amortised.
    ///
    /// # Panics
    /// In `checked` builds, panics if `e` is not currently valid.
    pub fn erase_edge(&mut self, e: E) {
        let Some(data) = self.edges.remove(e.index, e.generation) else {
            require(false, || PreconditionError::UseAfterErase {
                handle: format!("{e:?}"),
            });
            return;
        };
        let tail = self
            .verts
            .get_mut(data.tail.index, data.tail.generation)
            .expect("an edge's tail cannot be erased while the edge exists");
        tail.out.swap_remove(data.out_pos as usize);
        if (data.out_pos as usize) < tail.out.len() {
            let moved = tail.out[data.out_pos as usize];
            if let Some(moved_data) = self.edges.get_mut(moved.index, moved.generation) {
                moved_data.out_pos = data.out_pos;
            }
        }
        trace!(?e, "erase_edge");
    }

    /// Removes `v`, dropping its outgoing edges (the tracked direction)
    /// along with it. O(deg_out(v)) amortised, plus an O(size()) scan in
    /// `checked` builds to enforce the precondition below.
    ///
    /// # Panics
    /// In `checked` builds, panics if `v` is not currently valid, or if
    /// some other vertex still has a live edge into `v` — an incoming
    /// edge `OutAdj` does not track and so cannot drop on `v`'s behalf.
    pub fn erase_vert(&mut self, v: V) {
        #[cfg(feature = "checked")]
        {
            let foreign_incoming = self.edges().any(|e| self.head(e) == v && self.tail(e) != v);
            require(!foreign_incoming, || {
                PreconditionError::VertexHasIncidentEdges { vertex: v }
            });
        }

        let own_out = self
            .verts
            .get_mut(v.index, v.generation)
            .map(|d| core::mem::take(&mut d.out))
            .unwrap_or_default();
        for e in own_out {
            self.edges.remove(e.index, e.generation);
        }

        if self.verts.remove(v.index, v.generation).is_none() {
            require(false, || PreconditionError::UseAfterErase {
                handle: format!("{v:?}"),
            });
        }
        trace!(?v, "erase_vert");
    }

    /// Removes all edges and vertices.
    pub fn clear(&mut self) {
        self.verts.clear();
        self.edges.clear();
    }

    /// A uniformly random currently-valid vertex.
    ///
    /// # Panics
    /// In `checked` builds, panics if the graph has no vertices.
    pub fn random_vert<R: RngCore>(&self, rng: &mut R) -> V {
        match self.verts.random_index(rng) {
            Some(idx) => V::new(idx, self.verts.generation_of(idx)),
            None => {
                require(false, || PreconditionError::EmptySample {
                    kind: "vertex set",
                });
                crate::handle::null_vert()
            }
        }
    }

    /// A uniformly random currently-valid edge.
    ///
    /// # Panics
    /// In `checked` builds, panics if the graph has no edges.
    pub fn random_edge<R: RngCore>(&self, rng: &mut R) -> E {
        match self.edges.random_index(rng) {
            Some(idx) => E::new(idx, self.edges.generation_of(idx)),
            None => {
                require(false, || PreconditionError::EmptySample { kind: "edge set" });
                crate::handle::null_edge()
            }
        }
    }

    /// Borrows this graph as its in-adjacency dual: `in_edges` in the
    /// view enumerate exactly the edges this graph would expose via
    /// `out_edges` with endpoints swapped.
    #[must_use]
    pub fn reverse_view(&self) -> ReverseOut<'_> {
        ReverseOut::new(self)
    }

    fn out_edges_of(&self, v: V) -> &[E] {
        self.verts
            .get(v.index, v.generation)
            .map(|d| d.out.as_slice())
            .unwrap_or(&[])
    }
}

impl GraphBase for OutAdj {
    type VertIter<'a> = VertSlotIter<'a, VertData>;
    type EdgeIter<'a> = EdgeSlotIter<'a, EdgeData>;

    fn order(&self) -> usize {
        self.verts.len()
    }

    fn size(&self) -> usize {
        self.edges.len()
    }

    fn tail(&self, e: E) -> V {
        self.edges
            .get(e.index, e.generation)
            .map(|d| d.tail)
            .unwrap_or_else(crate::handle::null_vert)
    }

    fn head(&self, e: E) -> V {
        self.edges
            .get(e.index, e.generation)
            .map(|d| d.head)
            .unwrap_or_else(crate::handle::null_vert)
    }

    fn verts(&self) -> Self::VertIter<'_> {
        VertSlotIter::new(&self.verts)
    }

    fn edges(&self) -> Self::EdgeIter<'_> {
        EdgeSlotIter::new(&self.edges)
    }

    fn vert_map<T: Clone>(&self, default: T) -> VertMap<T> {
        VertMap::new(default)
    }

    fn edge_map<T: Clone>(&self, default: T) -> EdgeMap<T> {
        EdgeMap::new(default)
    }
}

impl OutEdges for OutAdj {
    type OutEdgeIter<'a> = IncidenceIter<'a>;

    fn out_edges(&self, v: V) -> Self::OutEdgeIter<'_> {
        IncidenceIter::new(self.out_edges_of(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_graph() {
        let g = OutAdj::new();
        assert_eq!(g.order(), 0);
        assert_eq!(g.size(), 0);
    }

    #[test]
    fn clear_empties_both_verts_and_edges() {
        let mut g = OutAdj::new();
        let a = g.insert_vert();
        let b = g.insert_vert();
        g.insert_edge(a, b);
        g.insert_edge(b, a);
        g.clear();
        assert_eq!(g.order(), 0);
        assert_eq!(g.size(), 0);
        assert_eq!(g.verts().count(), 0);
        assert_eq!(g.edges().count(), 0);
    }

    #[test]
    fn erase_vert_drops_its_own_outgoing_edges() {
        let mut g = OutAdj::new();
        let v = g.insert_vert();
        g.insert_edge(v, v);
        // v's self-loop is a tracked outgoing edge, so erasing v drops it
        // along the way rather than requiring a separate erase_edge first.
        g.erase_vert(v);
        assert_eq!(g.order(), 0);
        assert_eq!(g.size(), 0);
    }

    #[test]
    fn erase_vert_drops_its_outgoing_edge_to_another_vertex() {
        let mut g = OutAdj::new();
        let s = g.insert_vert();
        let t = g.insert_vert();
        g.insert_edge(s, t);
        // s is the tail (the tracked side), so erasing it drops the edge.
        g.erase_vert(s);
        assert_eq!(g.order(), 1);
        assert_eq!(g.size(), 0);
    }

    #[test]
    #[should_panic(expected = "precondition_unmet")]
    fn erasing_a_vertex_with_a_foreign_incoming_edge_panics() {
        let mut g = OutAdj::new();
        let s = g.insert_vert();
        let t = g.insert_vert();
        g.insert_edge(s, t);
        // t has no outgoing edges of its own, but s's edge into t is
        // untracked from t's side — OutAdj cannot drop it on t's behalf,
        // so erasing t is refused rather than leaving a dangling head.
        g.erase_vert(t);
    }

    #[test]
    fn out_edges_all_share_the_queried_tail() {
        let mut g = OutAdj::new();
        let a = g.insert_vert();
        let b = g.insert_vert();
        let c = g.insert_vert();
        g.insert_edge(a, b);
        g.insert_edge(a, c);
        g.insert_edge(b, c);
        let tails: Vec<_> = g.out_edges(a).map(|e| g.tail(e)).collect();
        assert_eq!(tails, vec![a, a]);
    }

    #[test]
    fn erase_edge_fixes_up_swap_removed_neighbor() {
        let mut g = OutAdj::new();
        let a = g.insert_vert();
        let b = g.insert_vert();
        let e1 = g.insert_edge(a, b);
        let e2 = g.insert_edge(a, b);
        let e3 = g.insert_edge(a, b);
        g.erase_edge(e1);
        // e3 (formerly at position 2) should have been moved into e1's
        // slot and remain independently erasable afterward.
        let remaining: Vec<_> = g.out_edges(a).collect();
        assert_eq!(remaining.len(), 2);
        assert!(remaining.contains(&e2));
        assert!(remaining.contains(&e3));
        g.erase_edge(e2);
        g.erase_edge(e3);
        assert_eq!(g.size(), 0);
    }
}
