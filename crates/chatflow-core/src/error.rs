//! Error types for Chatflow Core
//!
//! Two non-fatal error families exist:
//! - graph mutation errors (unknown node, rejected connection)
//! - save-time validation failure (more than one starting node)
//!
//! Every mutation is a single in-memory update, so a rejected operation
//! always leaves the graph exactly as it was.

use crate::id::NodeId;

/// Error raised by graph store mutations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// The referenced node does not exist in the graph
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),

    /// The connection policy refused the proposed edge
    #[error("{reason}")]
    ConnectionRejected {
        /// Human-readable reason, suitable for the status bar
        reason: String,
    },
}

impl GraphError {
    /// Check if the error is a policy rejection (as opposed to a bad reference)
    #[inline]
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::ConnectionRejected { .. })
    }
}

/// Error raised by save-time flow validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// More than one node has no incoming edge
    #[error(
        "Cannot save flow: {orphan_count} nodes have no incoming connections. \
         Only one starting node is allowed."
    )]
    MultipleStartNodes {
        /// Number of nodes with no incoming edge
        orphan_count: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_cites_orphan_count() {
        let err = ValidationError::MultipleStartNodes { orphan_count: 2 };
        assert_eq!(
            err.to_string(),
            "Cannot save flow: 2 nodes have no incoming connections. \
             Only one starting node is allowed."
        );
    }

    #[test]
    fn test_is_rejection() {
        let err = GraphError::ConnectionRejected {
            reason: "no".to_string(),
        };
        assert!(err.is_rejection());
        assert!(!GraphError::NodeNotFound(NodeId::new()).is_rejection());
    }
}
