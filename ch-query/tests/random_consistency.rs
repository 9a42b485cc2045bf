//! Randomized correctness check: the bidirectional search must agree with a
//! plain single-source Dijkstra over the same graph, for many random graphs
//! and many random node pairs in each. Seeded so a failure is reproducible.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ch_query::{BidirectionalQuery, EdgeData, Graph, StaticGraph, INVALID_WEIGHT};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const NUM_GRAPHS: u64 = 20;
const NODES_PER_GRAPH: u32 = 40;
const PAIRS_PER_GRAPH: usize = 40;

fn random_graph(rng: &mut StdRng) -> StaticGraph {
    let mut adjacency = vec![Vec::new(); NODES_PER_GRAPH as usize];
    for u in 0..NODES_PER_GRAPH {
        for v in (u + 1)..NODES_PER_GRAPH {
            if rng.gen_bool(0.15) {
                let weight = rng.gen_range(1..500);
                adjacency[u as usize].push((v, EdgeData::plain(weight, true, true)));
                adjacency[v as usize].push((u, EdgeData::plain(weight, true, true)));
            }
        }
    }
    StaticGraph::build(adjacency).unwrap()
}

/// Plain single-source Dijkstra over `graph`'s forward edges, used as the
/// ground truth the bidirectional search is checked against.
fn reference_distance(graph: &StaticGraph, start: u32, target: u32) -> u32 {
    let mut dist = vec![u32::MAX; graph.num_nodes() as usize];
    let mut heap = BinaryHeap::new();
    dist[start as usize] = 0;
    heap.push(Reverse((0u32, start)));

    while let Some(Reverse((d, node))) = heap.pop() {
        if d > dist[node as usize] {
            continue;
        }
        if node == target {
            return d;
        }
        for edge in graph.begin_edges(node)..graph.end_edges(node) {
            let data = graph.edge_data(edge);
            if !data.forward {
                continue;
            }
            let to = graph.target(edge);
            let nd = d + data.weight;
            if nd < dist[to as usize] {
                dist[to as usize] = nd;
                heap.push(Reverse((nd, to)));
            }
        }
    }

    dist[target as usize]
}

#[test]
fn bidirectional_search_matches_reference_dijkstra() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);

    for _ in 0..NUM_GRAPHS {
        let graph = random_graph(&mut rng);
        let mut query = BidirectionalQuery::new(NODES_PER_GRAPH);

        for _ in 0..PAIRS_PER_GRAPH {
            let start = rng.gen_range(0..NODES_PER_GRAPH);
            let target = rng.gen_range(0..NODES_PER_GRAPH);

            let expected = reference_distance(&graph, start, target);
            let actual = query.compute_distance_between_nodes(&graph, start, target);

            if expected == u32::MAX {
                assert_eq!(
                    actual, INVALID_WEIGHT,
                    "expected {start} -> {target} unreachable, got {actual}"
                );
            } else {
                assert_eq!(
                    actual, expected,
                    "distance mismatch {start} -> {target}: expected {expected}, got {actual}"
                );
            }
        }
    }
}
