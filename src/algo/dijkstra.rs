//! Dijkstra's shortest-path algorithm (spec.md §4.6.1, §4.6.2).
//!
//! Grounded on the teacher's `src/algo/dijkstra.rs`: a `BinaryHeap` of
//! [`MinScored`] pairs keyed on tentative distance, relaxed the classical
//! way. The only departure from the teacher's shape is that this crate
//! has no node/edge payload to thread through — distances and tree edges
//! live in the property maps the graph itself hands out.

use std::collections::BinaryHeap;

use tracing::debug;

use crate::adjacency::{GraphBase, InEdges, OutEdges};
use crate::algo::FloatMeasure;
use crate::error::{require, PreconditionError};
use crate::handle::{null_edge, V};
use crate::property_map::{VertMap, WeightFn};
use crate::scored::MinScored;
use crate::tree::{InRootedTree, OutRootedTree};

/// Computes, for every vertex reachable from `s`, the length of a
/// minimum-weight path from `s` and the tree edge that realizes it.
///
/// `dist(s) == 0`; unreachable vertices carry `K::infinite()`.
///
/// # Panics
/// In `checked` builds, panics if any edge weight is negative
/// (spec.md §4.6.1's precondition).
///
/// # Complexity
/// `O((|𝒱| + |ℰ|) log |𝒱|)` with the binary-heap priority queue used
/// here.
pub fn shortest_paths_from<G, K, W>(g: &G, s: V, w: &W) -> (OutRootedTree, VertMap<K>)
where
    G: GraphBase + OutEdges,
    K: FloatMeasure,
    W: WeightFn<K>,
{
    check_non_negative(g, w);

    let mut dist = g.vert_map(K::infinite());
    let mut visited = g.vert_map(false);
    let mut tree_edge = g.vert_map(null_edge());

    dist[s] = K::zero();
    let mut queue = BinaryHeap::new();
    queue.push(MinScored(K::zero(), s));

    while let Some(MinScored(d, v)) = queue.pop() {
        if visited[v] {
            continue;
        }
        visited[v] = true;

        for e in g.out_edges(v) {
            let t = g.head(e);
            if visited[t] {
                continue;
            }
            let candidate = d.clone() + w.call(e);
            if candidate < dist[t] {
                dist[t] = candidate.clone();
                tree_edge[t] = e;
                queue.push(MinScored(candidate, t));
            }
        }
    }

    debug!(root = ?s, "shortest_paths_from complete");
    (OutRootedTree::new(s, tree_edge), dist)
}

/// The symmetric query: for every vertex that can reach `t`, the length
/// of a minimum-weight path to `t`.
///
/// # Panics
/// In `checked` builds, panics if any edge weight is negative.
pub fn shortest_paths_to<G, K, W>(g: &G, t: V, w: &W) -> (InRootedTree, VertMap<K>)
where
    G: GraphBase + InEdges,
    K: FloatMeasure,
    W: WeightFn<K>,
{
    check_non_negative(g, w);

    let mut dist = g.vert_map(K::infinite());
    let mut visited = g.vert_map(false);
    let mut tree_edge = g.vert_map(null_edge());

    dist[t] = K::zero();
    let mut queue = BinaryHeap::new();
    queue.push(MinScored(K::zero(), t));

    while let Some(MinScored(d, v)) = queue.pop() {
        if visited[v] {
            continue;
        }
        visited[v] = true;

        for e in g.in_edges(v) {
            let u = g.tail(e);
            if visited[u] {
                continue;
            }
            let candidate = d.clone() + w.call(e);
            if candidate < dist[u] {
                dist[u] = candidate.clone();
                tree_edge[u] = e;
                queue.push(MinScored(candidate, u));
            }
        }
    }

    debug!(root = ?t, "shortest_paths_to complete");
    (InRootedTree::new(t, tree_edge), dist)
}

pub(crate) fn check_non_negative<G, K, W>(g: &G, w: &W)
where
    G: GraphBase,
    K: FloatMeasure,
    W: WeightFn<K>,
{
    #[cfg(feature = "checked")]
    for e in g.edges() {
        require(w.call(e) >= K::zero(), || PreconditionError::NegativeWeight {
            edge: e,
        });
    }
    #[cfg(not(feature = "checked"))]
    {
        let _ = (g, w);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjacency::OutAdj;

    #[test]
    fn source_has_zero_distance() {
        let mut g = OutAdj::new();
        let a = g.insert_vert();
        let b = g.insert_vert();
        let e = g.insert_edge(a, b);
        let mut w = g.edge_map(0.0);
        w[e] = 2.5;
        let (tree, dist) = shortest_paths_from(&g, a, &w);
        assert_eq!(tree.root(), a);
        assert_eq!(dist[a], 0.0);
        assert_eq!(dist[b], 2.5);
        assert_eq!(tree.in_edge_or_null(b), e);
        assert_eq!(tree.in_edge_or_null(a), null_edge());
    }

    #[test]
    fn unreachable_vertices_carry_infinity() {
        let mut g = OutAdj::new();
        let a = g.insert_vert();
        let b = g.insert_vert();
        let w = g.edge_map(1.0);
        let (tree, dist) = shortest_paths_from(&g, a, &w);
        assert!(dist[b].is_infinite());
        assert!(!tree.in_tree(b));
    }

    #[test]
    fn relaxation_invariant_holds_on_a_random_graph() {
        use rand::{rngs::StdRng, SeedableRng};
        let mut rng = StdRng::seed_from_u64(7);
        let mut g = OutAdj::new();
        let verts: Vec<_> = (0..20).map(|_| g.insert_vert()).collect();
        let mut edges = Vec::new();
        for _ in 0..100 {
            let s = g.random_vert(&mut rng);
            let t = g.random_vert(&mut rng);
            edges.push(g.insert_edge(s, t));
        }
        let mut w = g.edge_map(0.0);
        for &e in &edges {
            w[e] = (rand::RngCore::next_u32(&mut rng) as f64) / f64::from(u32::MAX);
        }
        let s = verts[0];
        let (tree, dist) = shortest_paths_from(&g, s, &w);
        assert_eq!(dist[s], 0.0);
        for &e in &edges {
            let h = g.head(e);
            let t = g.tail(e);
            if dist[h].is_finite() && dist[t].is_finite() {
                assert!(dist[h] <= dist[t] + w[e] + 1e-9);
            }
        }
        for v in g.verts() {
            let e = tree.in_edge_or_null(v);
            if e != null_edge() {
                assert_eq!(g.head(e), v);
                let expected = dist[g.tail(e)] + w[e];
                assert!((dist[v] - expected).abs() < 1e-9);
            }
        }
    }
}
