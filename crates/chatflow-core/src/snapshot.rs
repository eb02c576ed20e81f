//! Flow snapshot export
//!
//! [`FlowSnapshot`] is the persistable form of a graph: normalized node
//! and edge copies plus version-tagged metadata. Capturing a snapshot
//! never mutates the graph, and two captures of an unchanged graph
//! differ only in their timestamp.

use crate::edge::FlowEdge;
use crate::graph::FlowGraph;
use crate::node::FlowNode;
use serde::{Deserialize, Serialize};

/// Format version written into every snapshot
pub const SNAPSHOT_VERSION: &str = "1.0";

/// Metadata block attached to an exported flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotMetadata {
    /// Snapshot format version, for forward compatibility
    pub version: String,
    /// RFC 3339 capture time
    pub created_at: String,
    /// Number of nodes at capture time
    pub node_count: usize,
    /// Number of edges at capture time
    pub edge_count: usize,
}

/// A stable, persistable copy of the graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowSnapshot {
    /// All nodes, in drop order
    pub nodes: Vec<FlowNode>,
    /// All edges, in creation order
    pub edges: Vec<FlowEdge>,
    /// Capture metadata
    pub metadata: SnapshotMetadata,
}

impl FlowSnapshot {
    /// Capture a snapshot of the graph
    #[must_use]
    pub fn capture(graph: &FlowGraph) -> Self {
        Self {
            nodes: graph.nodes().cloned().collect(),
            edges: graph.edges().to_vec(),
            metadata: SnapshotMetadata {
                version: SNAPSHOT_VERSION.to_string(),
                created_at: chrono::Utc::now().to_rfc3339(),
                node_count: graph.node_count(),
                edge_count: graph.edge_count(),
            },
        }
    }

    /// Convert to JSON string
    ///
    /// # Errors
    ///
    /// Returns any `serde_json` serialization error.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Convert to pretty JSON string
    ///
    /// # Errors
    ///
    /// Returns any `serde_json` serialization error.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::ConnectionParams;
    use crate::node::{NodeKind, Position};
    use pretty_assertions::assert_eq;

    fn sample_graph() -> FlowGraph {
        let mut graph = FlowGraph::new();
        let n1 = graph.add_node(NodeKind::Message, Position::new(0.0, 0.0)).id;
        let n2 = graph.add_node(NodeKind::Message, Position::new(150.0, 40.0)).id;
        graph.propose_edge(ConnectionParams::between(n1, n2)).unwrap();
        graph
    }

    #[test]
    fn test_capture_counts_match_graph() {
        let graph = sample_graph();
        let snapshot = FlowSnapshot::capture(&graph);

        assert_eq!(snapshot.metadata.version, SNAPSHOT_VERSION);
        assert_eq!(snapshot.metadata.node_count, 2);
        assert_eq!(snapshot.metadata.edge_count, 1);
        assert_eq!(snapshot.nodes.len(), 2);
        assert_eq!(snapshot.edges.len(), 1);
    }

    #[test]
    fn test_capture_does_not_mutate_graph() {
        let graph = sample_graph();
        let before_nodes: Vec<_> = graph.nodes().cloned().collect();

        let _ = FlowSnapshot::capture(&graph);

        let after_nodes: Vec<_> = graph.nodes().cloned().collect();
        assert_eq!(before_nodes, after_nodes);
    }

    #[test]
    fn test_capture_is_structurally_idempotent() {
        let graph = sample_graph();
        let first = FlowSnapshot::capture(&graph);
        let second = FlowSnapshot::capture(&graph);

        // Only the timestamp may differ between captures.
        assert_eq!(first.nodes, second.nodes);
        assert_eq!(first.edges, second.edges);
        assert_eq!(first.metadata.node_count, second.metadata.node_count);
        assert_eq!(first.metadata.edge_count, second.metadata.edge_count);
    }

    #[test]
    fn test_json_shape() {
        let snapshot = FlowSnapshot::capture(&sample_graph());
        let json: serde_json::Value =
            serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();

        assert_eq!(json["metadata"]["version"], "1.0");
        assert_eq!(json["metadata"]["nodeCount"], 2);
        assert!(json["metadata"]["createdAt"].is_string());
        assert_eq!(json["nodes"][0]["type"], "message");
        assert!(json["edges"][0]["sourceHandle"].is_string());
    }
}
