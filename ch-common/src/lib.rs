//! Shared identifiers, error types, and logging setup for the CH query engine.

pub mod error;
pub mod ids;
pub mod logging;

pub use error::{Error, Result};
pub use ids::{EdgeId, NodeId, Weight, INVALID_EDGE, INVALID_NODE, INVALID_WEIGHT};
pub use logging::init_tracing;
