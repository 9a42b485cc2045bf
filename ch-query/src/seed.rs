//! Seeding the two search heaps from a pair of phantom nodes (C5), including
//! the same-edge degenerate case where start and target project onto the same
//! real edge and the route never touches the graph at all.

use ch_common::ids::{Weight, INVALID_EDGE, INVALID_NODE};

use crate::graph::Graph;
use crate::heap::AddressableHeap;
use crate::phantom::{haversine_distance_m, PhantomNodes};

pub(crate) struct SeedOutcome {
    pub same_edge: bool,
    pub upper_bound: Weight,
}

const NOT_SAME_EDGE: SeedOutcome = SeedOutcome {
    same_edge: false,
    upper_bound: Weight::MAX,
};

/// `round(weight * ratio)`, non-negative by construction.
fn ratio_key(weight: Weight, ratio: f64) -> Weight {
    ((weight as f64) * ratio).abs().round() as Weight
}

/// The same-edge shortcut's upper bound: `round(10 * euclid_proxy) / 10`,
/// per the ×10 weight convention (§6 of the design spec) — the proxy is
/// scaled up before rounding to preserve one decimal digit, then scaled back
/// down before being handed back as a route weight in the same unit as every
/// other edge weight in the graph.
fn same_edge_upper_bound(phantom: &PhantomNodes) -> Weight {
    let proxy = haversine_distance_m(phantom.start_coord, phantom.target_coord);
    ((10.0 * proxy).round() / 10.0).round() as Weight
}

/// Seed `forward`/`backward` from `phantom`. Returns whether start and target
/// turned out to lie on the same edge with the target strictly ahead of (or
/// reachable only behind) the start — in which case both heaps are left empty
/// and the caller should skip the search entirely and use the returned upper
/// bound as the route weight directly.
pub(crate) fn seed_heaps<G: Graph>(
    graph: &G,
    phantom: &PhantomNodes,
    forward: &mut AddressableHeap,
    backward: &mut AddressableHeap,
) -> SeedOutcome {
    let (s1, s2, sr) = (phantom.start_u, phantom.start_v, phantom.start_ratio);
    let (t1, t2, tr) = (phantom.target_u, phantom.target_v, phantom.target_ratio);

    if s1 == t1 && s2 == t2 {
        return seed_same_edge(graph, phantom, forward, backward);
    }

    if s1 != INVALID_NODE {
        seed_start(graph, s1, s2, sr, forward);
    }
    if t1 != INVALID_NODE {
        seed_target(graph, t1, t2, tr, backward);
    }

    NOT_SAME_EDGE
}

fn seed_start<G: Graph>(graph: &G, s1: u32, s2: u32, sr: f64, forward: &mut AddressableHeap) {
    let mut fwd_edge = graph.find_edge(s1, s2);
    if fwd_edge == INVALID_EDGE {
        fwd_edge = graph.find_edge(s2, s1);
    }
    if fwd_edge != INVALID_EDGE && graph.edge_data(fwd_edge).forward {
        let weight = graph.edge_data(fwd_edge).weight;
        forward.insert(s1, ratio_key(weight, sr), s1);
    }

    let mut back_edge = graph.find_edge(s2, s1);
    if back_edge == INVALID_EDGE {
        back_edge = graph.find_edge(s1, s2);
    }
    if back_edge != INVALID_EDGE && graph.edge_data(back_edge).backward {
        let weight = graph.edge_data(back_edge).weight;
        forward.insert(s2, ratio_key(weight, 1.0 - sr), s2);
    }
}

fn seed_target<G: Graph>(graph: &G, t1: u32, t2: u32, tr: f64, backward: &mut AddressableHeap) {
    let mut fwd_edge = graph.find_edge(t1, t2);
    if fwd_edge == INVALID_EDGE {
        fwd_edge = graph.find_edge(t2, t1);
    }
    if fwd_edge != INVALID_EDGE && graph.edge_data(fwd_edge).forward {
        let weight = graph.edge_data(fwd_edge).weight;
        backward.insert(t1, ratio_key(weight, tr), t1);
    }

    let mut back_edge = graph.find_edge(t2, t1);
    if back_edge == INVALID_EDGE {
        back_edge = graph.find_edge(t1, t2);
    }
    if back_edge != INVALID_EDGE && graph.edge_data(back_edge).backward {
        let weight = graph.edge_data(back_edge).weight;
        backward.insert(t2, ratio_key(weight, 1.0 - tr), t2);
    }
}

fn seed_same_edge<G: Graph>(
    graph: &G,
    phantom: &PhantomNodes,
    forward: &mut AddressableHeap,
    backward: &mut AddressableHeap,
) -> SeedOutcome {
    let (s1, s2, sr) = (phantom.start_u, phantom.start_v, phantom.start_ratio);
    let tr = phantom.target_ratio;

    let mut edge = graph.find_edge(s1, s2);
    if edge == INVALID_EDGE {
        edge = graph.find_edge(s2, s1);
    }
    let Some(edge) = (edge != INVALID_EDGE).then_some(edge) else {
        // No connecting edge at all: leave both heaps empty, the search loop
        // degenerates to "unreachable".
        return NOT_SAME_EDGE;
    };

    let data = graph.edge_data(edge);

    if data.forward && sr < tr {
        return SeedOutcome {
            same_edge: true,
            upper_bound: same_edge_upper_bound(phantom),
        };
    }

    if !data.backward {
        // Forward-only edge with the target "behind" the start along it: not
        // a same-edge shortcut after all, seed it as one ordinary edge split
        // at the start ratio instead.
        let weight = data.weight;
        forward.insert(s2, ratio_key(weight, sr), s2);
        backward.insert(s1, ratio_key(weight, 1.0 - sr), s1);
        return NOT_SAME_EDGE;
    }

    SeedOutcome {
        same_edge: true,
        upper_bound: same_edge_upper_bound(phantom),
    }
}
