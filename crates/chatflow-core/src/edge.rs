//! Edge model for the flow graph
//!
//! An edge is a directed connection from one node's source handle to
//! another node's target handle. Message nodes expose exactly one of
//! each in the current scope, named `"source"` and `"target"`.

use crate::id::{EdgeId, NodeId};
use serde::{Deserialize, Serialize};

/// Name of a connection port on a node
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandleId(pub String);

impl HandleId {
    /// The default outgoing port of a message node
    #[must_use]
    pub fn source() -> Self {
        Self("source".to_string())
    }

    /// The default incoming port of a message node
    #[must_use]
    pub fn target() -> Self {
        Self("target".to_string())
    }

    /// The port name as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for HandleId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for HandleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A directed connection between two nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowEdge {
    /// Unique identity within the graph
    pub id: EdgeId,
    /// Node the edge originates from
    pub source: NodeId,
    /// Node the edge points at
    pub target: NodeId,
    /// Outgoing port on the source node
    pub source_handle: HandleId,
    /// Incoming port on the target node
    pub target_handle: HandleId,
}

/// A proposed connection, before the policy has accepted it
///
/// This is what the rendering layer hands over when the user finishes a
/// drag between two handles. It carries no id; one is generated if the
/// edge is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionParams {
    /// Node the connection would originate from
    pub source: NodeId,
    /// Node the connection would point at
    pub target: NodeId,
    /// Outgoing port on the source node
    pub source_handle: HandleId,
    /// Incoming port on the target node
    pub target_handle: HandleId,
}

impl ConnectionParams {
    /// Create a proposal between the default handles of two nodes
    #[must_use]
    pub fn between(source: NodeId, target: NodeId) -> Self {
        Self {
            source,
            target,
            source_handle: HandleId::source(),
            target_handle: HandleId::target(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_between_uses_default_handles() {
        let params = ConnectionParams::between(NodeId::new(), NodeId::new());
        assert_eq!(params.source_handle.as_str(), "source");
        assert_eq!(params.target_handle.as_str(), "target");
    }

    #[test]
    fn test_edge_serializes_handles_camel_case() {
        let edge = FlowEdge {
            id: EdgeId::new(),
            source: NodeId::new(),
            target: NodeId::new(),
            source_handle: HandleId::source(),
            target_handle: HandleId::target(),
        };
        let json = serde_json::to_value(&edge).unwrap();
        assert_eq!(json["sourceHandle"], "source");
        assert_eq!(json["targetHandle"], "target");
    }
}
