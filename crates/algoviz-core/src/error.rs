//! Core error types for algoviz-core.
//!
//! The trace engines themselves never fail; these errors come from validating
//! graphs that were built by hand or loaded from JSON.

use thiserror::Error;

use crate::id::NodeId;

/// Errors produced by the algoviz-core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Two nodes share the same identifier.
    #[error("duplicate node id: '{id}'")]
    DuplicateNode { id: NodeId },

    /// An edge references a node that is not part of the graph.
    #[error("edge {from} -> {to} references unknown node '{missing}'")]
    DanglingEdge {
        from: NodeId,
        to: NodeId,
        missing: NodeId,
    },

    /// A node id was not found in the graph.
    #[error("node not found: '{id}'")]
    NodeNotFound { id: NodeId },

    /// A graph or trace could not be (de)serialized.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
