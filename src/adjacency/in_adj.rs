//! `InAdj`: tracks incoming incidence only.

use rand::RngCore;
use tracing::trace;

use super::{EdgeSlotIter, GraphBase, IncidenceIter, InEdges, ReverseIn, VertSlotIter};
use crate::error::{require, PreconditionError};
use crate::handle::{E, V};
use crate::property_map::{EdgeMap, VertMap};
use crate::slot::SlotTable;

struct VertData {
    inn: Vec<E>,
}

struct EdgeData {
    tail: V,
    head: V,
    in_pos: u32,
}

/// A directed graph that stores, per vertex, its incoming incidence list.
///
/// `in_edges(v)` runs in `O(deg_in(v))`; `out_edges` is not provided (use
/// [`crate::adjacency::BiAdj`] if both directions are needed).
#[derive(Default)]
pub struct InAdj {
    verts: SlotTable<VertData>,
    edges: SlotTable<EdgeData>,
}

impl InAdj {
    /// An empty graph.
    #[must_use]
    pub fn new() -> Self {
        InAdj {
            verts: SlotTable::new(),
            edges: SlotTable::new(),
        }
    }

    /// An empty graph with pre-reserved storage for `verts`/`edges`
    /// insertions.
    #[must_use]
    pub fn with_capacity(verts: usize, edges: usize) -> Self {
        InAdj {
            verts: SlotTable::with_capacity(verts),
            edges: SlotTable::with_capacity(edges),
        }
    }

    /// Adds a vertex with no incident edges. O(1) amortised.
    pub fn insert_vert(&mut self) -> V {
        let (index, generation) = self.verts.insert(VertData { inn: Vec::new() });
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

        let in_pos = self.verts.get(t.index, t.generation).unwrap().inn.len() as u32;
        let (index, generation) = self.edges.insert(EdgeData {
            tail: s,
            head: t,
            in_pos,
        });
        let e = E::new(index, generation);
        self.verts
            .get_mut(t.index, t.generation)
            .unwrap()
            .inn
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
        let head = self
            .verts
            .get_mut(data.head.index, data.head.generation)
            .expect("an edge's head cannot be erased while the edge exists");
        head.inn.swap_remove(data.in_pos as usize);
        if (data.in_pos as usize) < head.inn.len() {
            let moved = head.inn[data.in_pos as usize];
            if let Some(moved_data) = self.edges.get_mut(moved.index, moved.generation) {
                moved_data.in_pos = data.in_pos;
            }
        }
        trace!(?e, "erase_edge");
    }

    /// Removes `v`, dropping its incoming edges (the tracked direction)
    /// along with it. O(deg_in(v)) amortised, plus an O(size()) scan in
    /// `checked` builds to enforce the precondition below.
    ///
    /// # Panics
    /// In `checked` builds, panics if `v` is not currently valid, or if
    /// `v` still has a live edge out to some other vertex — an outgoing
    /// edge `InAdj` does not track and so cannot drop on `v`'s behalf.
    pub fn erase_vert(&mut self, v: V) {
        #[cfg(feature = "checked")]
        {
            let foreign_outgoing = self.edges().any(|e| self.tail(e) == v && self.head(e) != v);
            require(!foreign_outgoing, || {
                PreconditionError::VertexHasIncidentEdges { vertex: v }
            });
        }

        let own_in = self
            .verts
            .get_mut(v.index, v.generation)
            .map(|d| core::mem::take(&mut d.inn))
            .unwrap_or_default();
        for e in own_in {
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

    /// Borrows this graph as its out-adjacency dual.
    #[must_use]
    pub fn reverse_view(&self) -> ReverseIn<'_> {
        ReverseIn::new(self)
    }

    fn in_edges_of(&self, v: V) -> &[E] {
        self.verts
            .get(v.index, v.generation)
            .map(|d| d.inn.as_slice())
            .unwrap_or(&[])
    }
}

impl GraphBase for InAdj {
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

impl InEdges for InAdj {
    type InEdgeIter<'a> = IncidenceIter<'a>;

    fn in_edges(&self, v: V) -> Self::InEdgeIter<'_> {
        IncidenceIter::new(self.in_edges_of(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_graph() {
        let g = InAdj::new();
        assert_eq!(g.order(), 0);
        assert_eq!(g.size(), 0);
    }

    #[test]
    fn erase_vert_drops_its_own_incoming_self_loop() {
        let mut g = InAdj::new();
        let v = g.insert_vert();
        g.insert_edge(v, v);
        // v's self-loop is a tracked incoming edge, so erasing v drops it
        // along the way rather than requiring a separate erase_edge first.
        g.erase_vert(v);
        assert_eq!(g.order(), 0);
        assert_eq!(g.size(), 0);
    }

    #[test]
    fn erase_vert_drops_its_incoming_edge_from_another_vertex() {
        let mut g = InAdj::new();
        let s = g.insert_vert();
        let t = g.insert_vert();
        g.insert_edge(s, t);
        // t is the head (the tracked side), so erasing it drops the edge.
        g.erase_vert(t);
        assert_eq!(g.order(), 1);
        assert_eq!(g.size(), 0);
    }

    #[test]
    #[should_panic(expected = "precondition_unmet")]
    fn erasing_a_vertex_with_a_foreign_outgoing_edge_panics() {
        let mut g = InAdj::new();
        let s = g.insert_vert();
        let t = g.insert_vert();
        g.insert_edge(s, t);
        // s has no incoming edges of its own, but its edge into t is
        // untracked from s's side — InAdj cannot drop it on s's behalf,
        // so erasing s is refused rather than leaving a dangling tail.
        g.erase_vert(s);
    }

    #[test]
    fn in_edges_all_share_the_queried_head() {
        let mut g = InAdj::new();
        let a = g.insert_vert();
        let b = g.insert_vert();
        let c = g.insert_vert();
        g.insert_edge(a, c);
        g.insert_edge(b, c);
        g.insert_edge(a, b);
        let heads: Vec<_> = g.in_edges(c).map(|e| g.head(e)).collect();
        assert_eq!(heads, vec![c, c]);
    }
}
