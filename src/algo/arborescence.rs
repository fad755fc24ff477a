//! Minimum reachable/reaching arborescence via Prim's algorithm restricted
//! to the subgraph reachable from (or reaching) the root — spec.md
//! §4.6.3.
//!
//! Grounded on the teacher's `min_spanning_tree_prim` in
//! `src/algo/min_spanning_tree.rs`: grow the tree from a seed by
//! repeatedly taking the lightest frontier edge out of a `BinaryHeap`,
//! adapted here to a single rooted arborescence over a directed graph
//! rather than an undirected spanning forest.

use std::collections::BinaryHeap;

use tracing::debug;

use crate::adjacency::{GraphBase, InEdges, OutEdges};
use crate::algo::Measure;
use crate::handle::{null_edge, V};
use crate::property_map::WeightFn;
use crate::scored::MinScored;
use crate::tree::{InRootedTree, OutRootedTree};

/// Builds a minimum-weight spanning arborescence of the subgraph
/// reachable from `s`, rooted at `s`.
///
/// Unlike [`crate::algo::shortest_paths_from`], weights need only be
/// totally ordered — non-negativity is not required, since Prim compares
/// individual edge weights rather than summing path weights.
///
/// # Complexity
/// `O((|𝒱| + |ℰ|) log |ℰ|)`.
pub fn minimum_tree_reachable_from<G, K, W>(g: &G, s: V, w: &W) -> OutRootedTree
where
    G: GraphBase + OutEdges,
    K: Measure,
    W: WeightFn<K>,
{
    let mut in_tree = g.vert_map(false);
    let mut tree_edge = g.vert_map(null_edge());
    in_tree[s] = true;

    let mut frontier = BinaryHeap::new();
    for e in g.out_edges(s) {
        frontier.push(MinScored(w.call(e), e));
    }

    while let Some(MinScored(_, e)) = frontier.pop() {
        let v = g.head(e);
        if in_tree[v] {
            continue;
        }
        in_tree[v] = true;
        tree_edge[v] = e;
        for next in g.out_edges(v) {
            if !in_tree[g.head(next)] {
                frontier.push(MinScored(w.call(next), next));
            }
        }
    }

    debug!(root = ?s, "minimum_tree_reachable_from complete");
    OutRootedTree::new(s, tree_edge)
}

/// The symmetric query: a minimum-weight spanning arborescence of the
/// subgraph that can reach `t`, rooted at `t`.
pub fn minimum_tree_reaching_to<G, K, W>(g: &G, t: V, w: &W) -> InRootedTree
where
    G: GraphBase + InEdges,
    K: Measure,
    W: WeightFn<K>,
{
    let mut in_tree = g.vert_map(false);
    let mut tree_edge = g.vert_map(null_edge());
    in_tree[t] = true;

    let mut frontier = BinaryHeap::new();
    for e in g.in_edges(t) {
        frontier.push(MinScored(w.call(e), e));
    }

    while let Some(MinScored(_, e)) = frontier.pop() {
        let v = g.tail(e);
        if in_tree[v] {
            continue;
        }
        in_tree[v] = true;
        tree_edge[v] = e;
        for next in g.in_edges(v) {
            if !in_tree[g.tail(next)] {
                frontier.push(MinScored(w.call(next), next));
            }
        }
    }

    debug!(root = ?t, "minimum_tree_reaching_to complete");
    InRootedTree::new(t, tree_edge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjacency::OutAdj;

    #[test]
    fn single_edge_tree() {
        let mut g = OutAdj::new();
        let a = g.insert_vert();
        let b = g.insert_vert();
        let e = g.insert_edge(a, b);
        let w = g.edge_map(1i32);
        let tree = minimum_tree_reachable_from(&g, a, &w);
        assert_eq!(tree.root(), a);
        assert_eq!(tree.in_edge_or_null(b), e);
    }

    #[test]
    fn cut_invariant_on_a_random_graph() {
        use rand::{rngs::StdRng, SeedableRng};
        let mut rng = StdRng::seed_from_u64(11);
        let mut g = OutAdj::new();
        for _ in 0..20 {
            g.insert_vert();
        }
        for _ in 0..100 {
            let s = g.random_vert(&mut rng);
            let t = g.random_vert(&mut rng);
            g.insert_edge(s, t);
        }
        let s = g.random_vert(&mut rng);
        let w = g.edge_map(1i32);
        let tree = minimum_tree_reachable_from(&g, s, &w);
        assert_eq!(tree.root(), s);
        for e in g.edges() {
            if tree.in_tree(g.tail(e)) {
                assert!(tree.in_tree(g.head(e)), "cut invariant violated");
            }
        }
    }
}
