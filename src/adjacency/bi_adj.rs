//! `BiAdj`: tracks both outgoing and incoming incidence.

use rand::RngCore;
use tracing::trace;

use super::{EdgeSlotIter, GraphBase, IncidenceIter, InEdges, OutEdges, ReverseBi, VertSlotIter};
use crate::error::{require, PreconditionError};
use crate::handle::{E, V};
use crate::property_map::{EdgeMap, VertMap};
use crate::slot::SlotTable;

struct VertData {
    out: Vec<E>,
    inn: Vec<E>,
}

struct EdgeData {
    tail: V,
    head: V,
    out_pos: u32,
    in_pos: u32,
}

/// A directed graph that stores, per vertex, both its outgoing and
/// incoming incidence lists.
///
/// Both `out_edges(v)` and `in_edges(v)` run in `O(deg(v))`, at the cost
/// of double the intrusive bookkeeping of [`crate::adjacency::OutAdj`] /
/// [`crate::adjacency::InAdj`]. This is the only variant that supports
/// [`crate::algo::shortest_path`] and [`crate::algo::parallel_shortest_path`],
/// since a point-to-point query's backward leg needs `in_edges`.
#[derive(Default)]
pub struct BiAdj {
    verts: SlotTable<VertData>,
    edges: SlotTable<EdgeData>,
}

impl BiAdj {
    /// An empty graph.
    #[must_use]
    pub fn new() -> Self {
        BiAdj {
            verts: SlotTable::new(),
            edges: SlotTable::new(),
        }
    }

    /// An empty graph with pre-reserved storage for `verts`/`edges`
    /// insertions.
    #[must_use]
    pub fn with_capacity(verts: usize, edges: usize) -> Self {
        BiAdj {
            verts: SlotTable::with_capacity(verts),
            edges: SlotTable::with_capacity(edges),
        }
    }

    /// Adds a vertex with no incident edges. O(1) amortised.
    pub fn insert_vert(&mut self) -> V {
        let (index, generation) = self.verts.insert(VertData {
            out: Vec::new(),
            inn: Vec::new(),
        });
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
        // When s == t, in_pos is computed against the same (not-yet-mutated)
        // vertex record as out_pos, since nothing has been pushed yet.
        let in_pos = self.verts.get(t.index, t.generation).unwrap().inn.len() as u32;

        let (index, generation) = self.edges.insert(EdgeData {
            tail: s,
            head: t,
            out_pos,
            in_pos,
        });
        let e = E::new(index, generation);
        self.verts
            .get_mut(s.index, s.generation)
            .unwrap()
            .out
            .push(e);
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

        let tail = self
            .verts
            .get_mut(data.tail.index, data.tail.generation)
            .expect("an edge's tail cannot be erased while the edge exists");
        tail.out.swap_remove(data.out_pos as usize);
        let moved_out = (data.out_pos as usize < tail.out.len()).then(|| tail.out[data.out_pos as usize]);

        let head = self
            .verts
            .get_mut(data.head.index, data.head.generation)
            .expect("an edge's head cannot be erased while the edge exists");
        head.inn.swap_remove(data.in_pos as usize);
        let moved_in = (data.in_pos as usize < head.inn.len()).then(|| head.inn[data.in_pos as usize]);

        if let Some(moved) = moved_out {
            if let Some(moved_data) = self.edges.get_mut(moved.index, moved.generation) {
                moved_data.out_pos = data.out_pos;
            }
        }
        if let Some(moved) = moved_in {
            if let Some(moved_data) = self.edges.get_mut(moved.index, moved.generation) {
                moved_data.in_pos = data.in_pos;
            }
        }
        trace!(?e, "erase_edge");
    }

    /// Removes `v`, dropping every edge incident to it in either
    /// direction. O(deg(v)) amortised: both directions are tracked, so
    /// unlike [`crate::adjacency::OutAdj`]/[`crate::adjacency::InAdj`]
    /// there is no untracked side that could be left dangling, and no
    /// precondition to enforce beyond handle validity.
    ///
    /// # Panics
    /// In `checked` builds, panics if `v` is not currently valid.
    pub fn erase_vert(&mut self, v: V) {
        let (out, inn) = self
            .verts
            .get(v.index, v.generation)
            .map(|d| (d.out.clone(), d.inn.clone()))
            .unwrap_or_default();

        let mut seen = std::collections::HashSet::with_capacity(out.len() + inn.len());
        for e in out.into_iter().chain(inn) {
            // A self-loop on v appears once in `out` and once in `inn`;
            // erase_edge must run on it only once.
            if seen.insert(e) {
                self.erase_edge(e);
            }
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

    /// Borrows this graph with tail/head and `out_edges`/`in_edges`
    /// swapped.
    #[must_use]
    pub fn reverse_view(&self) -> ReverseBi<'_> {
        ReverseBi::new(self)
    }

    fn out_edges_of(&self, v: V) -> &[E] {
        self.verts
            .get(v.index, v.generation)
            .map(|d| d.out.as_slice())
            .unwrap_or(&[])
    }

    fn in_edges_of(&self, v: V) -> &[E] {
        self.verts
            .get(v.index, v.generation)
            .map(|d| d.inn.as_slice())
            .unwrap_or(&[])
    }
}

impl GraphBase for BiAdj {
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

impl OutEdges for BiAdj {
    type OutEdgeIter<'a> = IncidenceIter<'a>;

    fn out_edges(&self, v: V) -> Self::OutEdgeIter<'_> {
        IncidenceIter::new(self.out_edges_of(v))
    }
}

impl InEdges for BiAdj {
    type InEdgeIter<'a> = IncidenceIter<'a>;

    fn in_edges(&self, v: V) -> Self::InEdgeIter<'_> {
        IncidenceIter::new(self.in_edges_of(v))
    }
}
