//! The bidirectional Contraction Hierarchies search (C4): the engine that ties
//! the heap, graph view, phantom seeding, and shortcut unpacking together into
//! the two public operations this crate exists to provide.

use std::collections::VecDeque;

use ch_common::ids::{NodeId, Weight, INVALID_NODE, INVALID_WEIGHT};

use crate::graph::Graph;
use crate::heap::AddressableHeap;
use crate::phantom::PhantomNodes;
use crate::seed;
use crate::unpack::unpack_edge;

/// A reusable bidirectional query. Owns both search heaps so repeated calls
/// against the same graph don't reallocate a node-sized side table each time —
/// call [`BidirectionalQuery::new`] once per graph and reuse it across queries.
pub struct BidirectionalQuery {
    forward: AddressableHeap,
    backward: AddressableHeap,
}

impl BidirectionalQuery {
    pub fn new(num_nodes: u32) -> Self {
        Self {
            forward: AddressableHeap::new(num_nodes as usize),
            backward: AddressableHeap::new(num_nodes as usize),
        }
    }

    fn reset(&mut self) {
        self.forward.reset();
        self.backward.reset();
    }

    /// Compute the minimum-weight route between a pair of phantom-projected
    /// coordinates, appending the full node sequence (with shortcuts unpacked)
    /// to `out_path`.
    ///
    /// Returns `(weight, same_edge)`. `weight` is [`ch_common::INVALID_WEIGHT`]
    /// when no route exists. `same_edge` is set when start and target resolved
    /// onto the same real edge; in that case `weight` is a Euclidean upper
    /// bound and `out_path` is left empty, matching the same "no path to walk"
    /// contract as the unreachable case.
    pub fn compute_route<G: Graph>(
        &mut self,
        graph: &G,
        phantom: &PhantomNodes,
        out_path: &mut Vec<NodeId>,
    ) -> (Weight, bool) {
        out_path.clear();

        if !phantom.is_valid() {
            return (INVALID_WEIGHT, false);
        }

        self.reset();
        let span = tracing::trace_span!("compute_route");
        let _enter = span.enter();

        let seeded = seed::seed_heaps(graph, phantom, &mut self.forward, &mut self.backward);
        if seeded.same_edge {
            tracing::trace!(upper_bound = seeded.upper_bound, "endpoints share an edge");
            return (seeded.upper_bound, true);
        }

        let (middle, upper_bound) = self.run(graph, seeded.upper_bound);
        if middle == INVALID_NODE || upper_bound == INVALID_WEIGHT {
            tracing::trace!("no route found");
            return (INVALID_WEIGHT, false);
        }

        self.assemble_path(
            graph,
            middle,
            phantom.start_u,
            phantom.start_v,
            phantom.target_u,
            phantom.target_v,
            out_path,
        );

        (upper_bound, false)
    }

    /// Compute the minimum-weight distance between two graph nodes directly,
    /// without any phantom seeding. Used for node-to-node distance queries
    /// (e.g. building a many-to-many distance matrix).
    pub fn compute_distance_between_nodes<G: Graph>(
        &mut self,
        graph: &G,
        start: NodeId,
        target: NodeId,
    ) -> Weight {
        self.reset();
        let span = tracing::trace_span!("compute_distance_between_nodes", start, target);
        let _enter = span.enter();

        if start == target {
            return 0;
        }

        self.forward.insert(start, 0, start);
        self.backward.insert(target, 0, target);

        let (_, upper_bound) = self.run(graph, INVALID_WEIGHT);
        upper_bound
    }

    /// Run the alternating forward/backward relaxation to convergence,
    /// returning the meeting node and the resulting upper bound.
    fn run<G: Graph>(&mut self, graph: &G, mut upper_bound: Weight) -> (NodeId, Weight) {
        let mut middle = INVALID_NODE;

        while self.forward.size() > 0 || self.backward.size() > 0 {
            if self.forward.size() > 0 {
                self.routing_step(graph, true, &mut middle, &mut upper_bound);
            }
            if self.backward.size() > 0 {
                self.routing_step(graph, false, &mut middle, &mut upper_bound);
            }
        }

        (middle, upper_bound)
    }

    /// One settle-and-relax step of the search in `forward_direction`.
    fn routing_step<G: Graph>(
        &mut self,
        graph: &G,
        forward_direction: bool,
        middle: &mut NodeId,
        upper_bound: &mut Weight,
    ) {
        let (self_heap, other_heap) = if forward_direction {
            (&mut self.forward, &mut self.backward)
        } else {
            (&mut self.backward, &mut self.forward)
        };

        let Some(node) = self_heap.delete_min() else {
            return;
        };
        let distance = self_heap.get_key(node);

        if other_heap.was_inserted(node) {
            let joined = distance.saturating_add(other_heap.get_key(node));
            if joined < *upper_bound {
                *middle = node;
                *upper_bound = joined;
            }
        }

        if distance > *upper_bound {
            self_heap.delete_all();
            return;
        }

        for edge in graph.begin_edges(node)..graph.end_edges(node) {
            let data = graph.edge_data(edge);
            let usable = if forward_direction {
                data.forward
            } else {
                data.backward
            };
            if !usable {
                continue;
            }
            debug_assert!(data.weight > 0, "edge weights must be positive");

            let to = graph.target(edge);
            let to_distance = distance.saturating_add(data.weight);

            if !self_heap.was_inserted(to) {
                self_heap.insert(to, to_distance, node);
            } else if to_distance < self_heap.get_key(to) {
                *self_heap.get_data_mut(to) = node;
                self_heap.decrease_key(to, to_distance);
            }
        }
    }

    /// Walk both heaps' parent pointers back from the meeting node to the
    /// respective phantom bounding nodes, then unpack every resulting hop.
    fn assemble_path<G: Graph>(
        &self,
        graph: &G,
        middle: NodeId,
        s1: NodeId,
        s2: NodeId,
        t1: NodeId,
        t2: NodeId,
        out_path: &mut Vec<NodeId>,
    ) {
        let mut packed: VecDeque<NodeId> = VecDeque::new();

        let mut node = middle;
        while node != s1 && node != s2 {
            node = self.forward.get_data(node);
            packed.push_front(node);
        }
        packed.push_back(middle);

        let mut node = middle;
        while node != t1 && node != t2 {
            node = self.backward.get_data(node);
            packed.push_back(node);
        }

        let packed: Vec<NodeId> = packed.into_iter().collect();
        out_path.push(packed[0]);
        for hop in packed.windows(2) {
            unpack_edge(graph, hop[0], hop[1], out_path);
        }
    }
}
