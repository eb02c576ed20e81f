//! Error types for Chatflow Session
//!
//! Policy rejections and validation failures are *not* errors at this
//! layer; they surface as status notices. What remains is the caller
//! handing in a stale node id.

use chatflow_core::{GraphError, NodeId};

/// Error raised when a command cannot be applied
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// A command referenced a node that is not in the graph
    #[error("unknown node: {0}")]
    UnknownNode(NodeId),

    /// The graph store refused a mutation
    #[error(transparent)]
    Graph(#[from] GraphError),
}
