//! Bidirectional Contraction Hierarchies query engine.
//!
//! Consumes a graph that has already been contracted (node ordering chosen,
//! shortcuts inserted) by an external preprocessing stage, and answers
//! shortest-route and shortest-distance queries against it. Preprocessing
//! itself, and resolving raw coordinates down to [`phantom::PhantomNodes`],
//! both live outside this crate — see [`graph::Graph`] and
//! [`phantom::PhantomResolver`] for the seams.

mod graph;
mod heap;
mod phantom;
mod seed;
mod search;
mod unpack;

pub use graph::{EdgeData, Graph, StaticGraph};
pub use heap::AddressableHeap;
pub use phantom::{Coordinate, PhantomNodes, PhantomResolver};
pub use search::BidirectionalQuery;

pub use ch_common::ids::{EdgeId, NodeId, Weight, INVALID_EDGE, INVALID_NODE, INVALID_WEIGHT};
pub use ch_common::Error;
