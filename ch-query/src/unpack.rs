//! Shortcut unpacking (C6): expand a path over the contracted graph, where any
//! hop may be a shortcut summarising a longer detour, into the full sequence of
//! original nodes.
//!
//! Implemented with an explicit work stack rather than recursion, so a long
//! packed path (or a pathologically deep contraction order) can't blow the
//! call stack.

use ch_common::ids::{EdgeId, NodeId, Weight, INVALID_EDGE};

use crate::graph::Graph;

/// Append the full expansion of the edge `u -> v` to `out` (not including `u`
/// itself — callers seed `out` with the path's first node before the first
/// call). `u` and `v` must be adjacent in `graph`.
pub(crate) fn unpack_edge<G: Graph>(graph: &G, u: NodeId, v: NodeId, out: &mut Vec<NodeId>) {
    debug_assert_ne!(u, v, "unpack_edge called on a degenerate self-edge");

    // Processed as a stack of (u, v) hops still to expand. Pushed in reverse
    // order on each shortcut split so popping (LIFO) still visits the path
    // left-to-right: the (u, middle) half must come out before (middle, v).
    let mut pending: Vec<(NodeId, NodeId)> = vec![(u, v)];

    while let Some((u, v)) = pending.pop() {
        let edge = find_unpacking_edge(graph, u, v);
        debug_assert!(
            edge != INVALID_EDGE,
            "no usable edge between {u} and {v} while unpacking a shortcut"
        );
        let data = graph.edge_data(edge);

        if data.shortcut {
            let middle = data.middle;
            pending.push((middle, v));
            pending.push((u, middle));
        } else {
            out.push(v);
        }
    }
}

/// Minimum-weight edge between `u` and `v` usable in the direction that gets
/// you from `u` to `v`: first a forward edge stored at `u`, falling back to a
/// backward edge stored at `v` (mirroring how the graph represents one-way
/// connections, see the `graph` module doc comment).
fn find_unpacking_edge<G: Graph>(graph: &G, u: NodeId, v: NodeId) -> EdgeId {
    let mut best = INVALID_EDGE;
    let mut best_weight = Weight::MAX;

    for edge in graph.begin_edges(u)..graph.end_edges(u) {
        let data = graph.edge_data(edge);
        if graph.target(edge) == v && data.forward && data.weight < best_weight {
            best = edge;
            best_weight = data.weight;
        }
    }
    if best != INVALID_EDGE {
        return best;
    }

    for edge in graph.begin_edges(v)..graph.end_edges(v) {
        let data = graph.edge_data(edge);
        if graph.target(edge) == u && data.backward && data.weight < best_weight {
            best = edge;
            best_weight = data.weight;
        }
    }
    best
}
