//! Property tests over randomly generated edge lists, checking invariants
//! that unit tests exercise only at a handful of fixed points: handle
//! identity survives arbitrary insert/erase interleavings, and erasure
//! never leaves an adjacency container's bookkeeping inconsistent.

use adjgraph::adjacency::{BiAdj, GraphBase, InEdges, OutEdges};
use proptest::collection::vec;
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    InsertVert,
    InsertEdge(usize, usize),
    EraseLastEdge,
}

fn op_strategy(max_vert: usize) -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::InsertVert),
        5 => (0..max_vert, 0..max_vert).prop_map(|(s, t)| Op::InsertEdge(s, t)),
        1 => Just(Op::EraseLastEdge),
    ]
}

proptest! {
    #[test]
    fn order_and_size_match_live_handle_counts(ops in vec(op_strategy(16), 0..200)) {
        let mut g = BiAdj::new();
        let mut verts = Vec::new();
        let mut edges = Vec::new();

        for op in ops {
            match op {
                Op::InsertVert => verts.push(g.insert_vert()),
                Op::InsertEdge(si, ti) => {
                    if verts.is_empty() {
                        continue;
                    }
                    let s = verts[si % verts.len()];
                    let t = verts[ti % verts.len()];
                    edges.push(g.insert_edge(s, t));
                }
                Op::EraseLastEdge => {
                    if let Some(e) = edges.pop() {
                        g.erase_edge(e);
                    }
                }
            }
        }

        prop_assert_eq!(g.order(), verts.len());
        prop_assert_eq!(g.size(), edges.len());

        // Every surviving edge's endpoints are still reachable through the
        // per-vertex incidence lists in both directions.
        for &e in &edges {
            let tail = g.tail(e);
            let head = g.head(e);
            prop_assert!(g.out_edges(tail).any(|o| o == e));
            prop_assert!(g.in_edges(head).any(|i| i == e));
        }
    }

    #[test]
    fn erased_edge_handle_never_resurfaces(
        n in 2usize..12,
        erase_at in 0usize..50,
    ) {
        let mut g = BiAdj::new();
        let verts: Vec<_> = (0..n).map(|_| g.insert_vert()).collect();
        let mut edges = Vec::new();
        for i in 0..50 {
            let s = verts[i % n];
            let t = verts[(i * 7 + 3) % n];
            edges.push(g.insert_edge(s, t));
        }

        let victim = edges[erase_at % edges.len()];
        g.erase_edge(victim);

        prop_assert!(!g.edges().any(|e| e == victim));
    }
}
