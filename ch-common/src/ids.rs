//! Opaque identifiers shared between the graph view, the heap, and the search engine.

/// A node in the contracted graph.
pub type NodeId = u32;

/// An edge in the contracted graph.
pub type EdgeId = u32;

/// A route or edge cost, in the internal weight unit (see the crate-level ×10 note
/// on same-edge distance proxies).
pub type Weight = u32;

/// Sentinel meaning "no such node".
pub const INVALID_NODE: NodeId = u32::MAX;

/// Sentinel meaning "no such edge".
pub const INVALID_EDGE: EdgeId = u32::MAX;

/// Sentinel meaning "unreachable" / "not yet computed".
pub const INVALID_WEIGHT: Weight = u32::MAX;
