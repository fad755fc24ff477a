//! The rooted-tree result returned by the shortest-path and arborescence
//! algorithms (spec.md §4.5).

use crate::adjacency::GraphBase;
use crate::handle::{null_edge, E, V};
use crate::property_map::VertMap;

/// An out-rooted tree: every reachable non-root vertex names the
/// incoming tree edge whose other endpoint is one step closer to the
/// root.
///
/// Returned by [`crate::algo::shortest_paths_from`] and
/// [`crate::algo::minimum_tree_reachable_from`].
pub struct OutRootedTree {
    root: V,
    in_edge: VertMap<E>,
}

impl OutRootedTree {
    pub(crate) fn new(root: V, in_edge: VertMap<E>) -> Self {
        OutRootedTree { root, in_edge }
    }

    /// The root the tree was built from.
    #[must_use]
    pub fn root(&self) -> V {
        self.root
    }

    /// Whether `v` is reachable from the root along tree edges.
    #[must_use]
    pub fn in_tree(&self, v: V) -> bool {
        v == self.root || *self.in_edge.get(v) != null_edge()
    }

    /// The tree edge incident on `v` whose tail is closer to the root, or
    /// `null_edge()` for the root or for an unreachable vertex.
    #[must_use]
    pub fn in_edge_or_null(&self, v: V) -> E {
        if v == self.root {
            null_edge()
        } else {
            *self.in_edge.get(v)
        }
    }

    /// Walks tree edges from `v` back to the root, returning them in
    /// root-to-`v` order. Empty if `v` is not in the tree. `g` must be
    /// the same graph the tree was computed over (or an equivalent view),
    /// so `tail(e)` resolves the edges back to their endpoints.
    #[must_use]
    pub fn path_to<G: GraphBase>(&self, g: &G, v: V) -> Vec<E> {
        let mut edges = Vec::new();
        if !self.in_tree(v) {
            return edges;
        }
        let mut cur = v;
        while cur != self.root {
            let e = self.in_edge_or_null(cur);
            edges.push(e);
            cur = g.tail(e);
        }
        edges.reverse();
        edges
    }
}

/// An in-rooted tree: every vertex that reaches the root names the
/// outgoing tree edge whose other endpoint is one step closer to the
/// root.
///
/// Returned by [`crate::algo::shortest_paths_to`] and
/// [`crate::algo::minimum_tree_reaching_to`].
pub struct InRootedTree {
    root: V,
    out_edge: VertMap<E>,
}

impl InRootedTree {
    pub(crate) fn new(root: V, out_edge: VertMap<E>) -> Self {
        InRootedTree { root, out_edge }
    }

    /// The root the tree was built from.
    #[must_use]
    pub fn root(&self) -> V {
        self.root
    }

    /// Whether `v` reaches the root along tree edges.
    #[must_use]
    pub fn in_tree(&self, v: V) -> bool {
        v == self.root || *self.out_edge.get(v) != null_edge()
    }

    /// The tree edge incident on `v` whose head is closer to the root, or
    /// `null_edge()` for the root or for a vertex that cannot reach it.
    #[must_use]
    pub fn out_edge_or_null(&self, v: V) -> E {
        if v == self.root {
            null_edge()
        } else {
            *self.out_edge.get(v)
        }
    }

    /// Walks tree edges from `v` forward to the root, returning them in
    /// `v`-to-root order. Empty if `v` is not in the tree.
    #[must_use]
    pub fn path_to_root<G: GraphBase>(&self, g: &G, v: V) -> Vec<E> {
        let mut edges = Vec::new();
        if !self.in_tree(v) {
            return edges;
        }
        let mut cur = v;
        while cur != self.root {
            let e = self.out_edge_or_null(cur);
            edges.push(e);
            cur = g.head(e);
        }
        edges
    }
}
