//! Error types for construction-time graph validation.
//!
//! Per-query contract violations (§7 of the design spec) are assertions, not
//! `Result`s — they indicate a broken preprocessing stage and halt the query.
//! This type only covers the one place a caller can hand the engine bad data
//! and expect a diagnosable failure instead of a panic: building a `StaticGraph`.

use thiserror::Error;

use crate::ids::{EdgeId, NodeId, Weight};

/// Errors raised while assembling a [`StaticGraph`](../../ch_query/struct.StaticGraph.html)
/// from untrusted preprocessing output.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("edge {edge} has weight {weight}, but edge weights must be positive")]
    NonPositiveWeight { edge: EdgeId, weight: Weight },

    #[error("edge {edge} has neither forward nor backward set")]
    NoDirection { edge: EdgeId },

    #[error("edge {edge} is a shortcut but its middle node {middle} is out of range")]
    DanglingShortcutMiddle { edge: EdgeId, middle: NodeId },

    #[error("edge {edge} references target node {target}, which does not exist in a graph of {num_nodes} nodes")]
    TargetOutOfRange {
        edge: EdgeId,
        target: NodeId,
        num_nodes: u32,
    },
}

/// Convenience result type for graph construction.
pub type Result<T> = std::result::Result<T, Error>;
