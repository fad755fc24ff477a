//! Point-to-point shortest path, with an optional parallel bidirectional
//! strategy — spec.md §4.6.4.
//!
//! A point-to-point query doesn't need the full single-source tree:
//! `shortest_path` runs the same relaxation loop as
//! [`crate::algo::shortest_paths_from`] but stops as soon as `t` is
//! popped off the frontier, since once a vertex is popped its distance is
//! final. `parallel_shortest_path` trades that early exit for two
//! independent full searches — forward from `s`, backward from `t` over
//! the graph's own reverse view — run concurrently and joined at
//! whichever edge minimizes the combined distance. Both require
//! [`crate::adjacency::BiAdj`] specifically, since the backward leg needs
//! `in_edges`.

use std::collections::BinaryHeap;

use crate::adjacency::{BiAdj, GraphBase, InEdges, OutEdges};
use crate::algo::dijkstra::check_non_negative;
use crate::algo::FloatMeasure;
use crate::handle::{null_edge, E, V};
use crate::property_map::WeightFn;
use crate::scored::MinScored;

/// The shortest path from `s` to `t` as an ordered sequence of edges, or
/// an empty vector if `t` is unreachable from `s` (or `s == t`).
///
/// # Panics
/// In `checked` builds, panics if any edge weight is negative.
pub fn shortest_path<K, W>(g: &BiAdj, s: V, t: V, w: &W) -> Vec<E>
where
    K: FloatMeasure,
    W: WeightFn<K>,
{
    if s == t {
        return Vec::new();
    }
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
        if v == t {
            break;
        }

        for e in g.out_edges(v) {
            let h = g.head(e);
            if visited[h] {
                continue;
            }
            let candidate = d.clone() + w.call(e);
            if candidate < dist[h] {
                dist[h] = candidate.clone();
                tree_edge[h] = e;
                queue.push(MinScored(candidate, h));
            }
        }
    }

    if !visited[t] {
        return Vec::new();
    }

    let mut edges = Vec::new();
    let mut cur = t;
    while cur != s {
        let e = tree_edge[cur];
        if e == null_edge() {
            return Vec::new();
        }
        edges.push(e);
        cur = g.tail(e);
    }
    edges.reverse();
    edges
}

/// The parallel counterpart to [`shortest_path`], identical in the path
/// it returns but computed by running a full forward search from `s` and
/// a full backward search from `t` concurrently (via `rayon::join`) and
/// then picking the edge at which the two searches meet most cheaply.
///
/// Gated behind the `rayon` feature; off by default.
///
/// # Panics
/// In `checked` builds, panics if any edge weight is negative.
#[cfg(feature = "rayon")]
pub fn parallel_shortest_path<K, W>(g: &BiAdj, s: V, t: V, w: &W) -> Vec<E>
where
    K: FloatMeasure + Send,
    W: WeightFn<K> + Sync,
{
    if s == t {
        return Vec::new();
    }
    check_non_negative(g, w);

    let (forward, backward) = rayon::join(
        || crate::algo::shortest_paths_from(g, s, w),
        || crate::algo::shortest_paths_to(g, t, w),
    );
    let (fwd_tree, fwd_dist) = forward;
    let (bwd_tree, bwd_dist) = backward;

    let mut best: Option<(K, E)> = None;
    for e in g.edges() {
        let u = g.tail(e);
        let v = g.head(e);
        if fwd_dist[u] >= K::infinite() || bwd_dist[v] >= K::infinite() {
            continue;
        }
        let total = fwd_dist[u].clone() + w.call(e) + bwd_dist[v].clone();
        let better = match &best {
            Some((b, _)) => total < *b,
            None => true,
        };
        if better {
            best = Some((total, e));
        }
    }

    match best {
        None => Vec::new(),
        Some((_, meet)) => {
            let mut path = fwd_tree.path_to(g, g.tail(meet));
            path.push(meet);
            path.extend(bwd_tree.path_to_root(g, g.head(meet)));
            path
        }
    }
}
