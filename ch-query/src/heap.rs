//! Addressable decrease-key priority queue (C1), built on `BinaryHeap` plus a
//! dense per-node side table — the same lazy-deletion idiom the rest of this
//! codebase's Dijkstra variants use: push a duplicate `(key, node)` pair on
//! every `decrease_key` instead of mutating the heap in place, and let stale
//! duplicates fall out of `delete_min` on their own.
//!
//! The side table is versioned rather than cleared on [`AddressableHeap::reset`],
//! so a query engine that owns one of these across many calls pays for the
//! reset once (a counter bump) instead of re-zeroing a node-sized vector.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ch_common::ids::{NodeId, Weight, INVALID_NODE};

#[derive(Clone, Copy)]
struct Entry {
    version: u64,
    key: Weight,
    parent: NodeId,
    removed: bool,
}

impl Default for Entry {
    fn default() -> Self {
        Entry {
            version: 0,
            key: Weight::MAX,
            parent: INVALID_NODE,
            removed: false,
        }
    }
}

pub struct AddressableHeap {
    queue: BinaryHeap<Reverse<(Weight, NodeId)>>,
    side: Vec<Entry>,
    current_version: u64,
    size: usize,
}

impl AddressableHeap {
    pub fn new(num_nodes: usize) -> Self {
        Self {
            queue: BinaryHeap::new(),
            side: vec![Entry::default(); num_nodes],
            current_version: 1,
            size: 0,
        }
    }

    /// Forget every node ever inserted and start a fresh generation. Cheap: it
    /// does not touch the side table, just bumps a counter.
    pub fn reset(&mut self) {
        self.queue.clear();
        self.size = 0;
        self.current_version += 1;
    }

    fn entry(&self, node: NodeId) -> &Entry {
        &self.side[node as usize]
    }

    /// Insert `node` with the given key and parent. `node` must not already be
    /// present in this generation.
    pub fn insert(&mut self, node: NodeId, key: Weight, parent: NodeId) {
        debug_assert!(
            !self.was_inserted(node),
            "insert called on a node already present in the heap"
        );
        self.side[node as usize] = Entry {
            version: self.current_version,
            key,
            parent,
            removed: false,
        };
        self.queue.push(Reverse((key, node)));
        self.size += 1;
    }

    /// Lower `node`'s key. `node` must currently be present (inserted and not
    /// yet removed) in this generation.
    pub fn decrease_key(&mut self, node: NodeId, key: Weight) {
        debug_assert!(
            self.was_inserted(node) && !self.entry(node).removed,
            "decrease_key called on a node not currently in the heap"
        );
        debug_assert!(
            key <= self.entry(node).key,
            "decrease_key must not raise the key"
        );
        self.side[node as usize].key = key;
        self.queue.push(Reverse((key, node)));
    }

    /// Remove and return the node with the smallest key, or `None` if empty.
    pub fn delete_min(&mut self) -> Option<NodeId> {
        while let Some(Reverse((key, node))) = self.queue.pop() {
            let entry = self.entry(node);
            if entry.version != self.current_version || entry.removed || entry.key != key {
                continue; // stale duplicate left behind by an earlier decrease_key
            }
            self.side[node as usize].removed = true;
            self.size -= 1;
            return Some(node);
        }
        None
    }

    /// Drop every node still queued, without disturbing what's already been
    /// read via `get_key`/`get_data`/`was_inserted`.
    pub fn delete_all(&mut self) {
        self.queue.clear();
        self.size = 0;
    }

    /// The key of a previously inserted node.
    pub fn get_key(&self, node: NodeId) -> Weight {
        debug_assert!(self.was_inserted(node));
        self.entry(node).key
    }

    /// The parent of a previously inserted node.
    pub fn get_data(&self, node: NodeId) -> NodeId {
        debug_assert!(self.was_inserted(node));
        self.entry(node).parent
    }

    /// Mutable access to a previously inserted node's parent, used to retarget
    /// it just before a `decrease_key`.
    pub fn get_data_mut(&mut self, node: NodeId) -> &mut NodeId {
        debug_assert!(self.was_inserted(node));
        &mut self.side[node as usize].parent
    }

    /// Whether `node` has been inserted at any point in the current generation,
    /// regardless of whether it has since been removed by `delete_min`.
    pub fn was_inserted(&self, node: NodeId) -> bool {
        self.entry(node).version == self.current_version
    }

    /// Number of nodes still queued (inserted but not yet removed).
    pub fn size(&self) -> usize {
        self.size
    }
}
