//! Graph store
//!
//! [`FlowGraph`] is the single source of truth for one editing session:
//! an insertion-ordered node table plus an edge list. All mutations are
//! synchronous single in-memory updates; a rejected operation leaves the
//! graph untouched.
//!
//! # Example
//!
//! ```
//! use chatflow_core::{ConnectionParams, FlowGraph, NodeKind, Position};
//!
//! let mut graph = FlowGraph::new();
//! let first = graph.add_node(NodeKind::Message, Position::new(0.0, 0.0)).id;
//! let second = graph.add_node(NodeKind::Message, Position::new(200.0, 0.0)).id;
//!
//! graph.propose_edge(ConnectionParams::between(first, second))?;
//! assert_eq!(graph.edge_count(), 1);
//! # Ok::<(), chatflow_core::GraphError>(())
//! ```

use crate::edge::{ConnectionParams, FlowEdge};
use crate::error::GraphError;
use crate::id::{EdgeId, NodeId};
use crate::node::{FlowNode, NodeDataPatch, NodeKind, Position};
use crate::policy::{ConnectionPolicy, SingleOutgoingPolicy};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// In-memory store of nodes and edges for one editing session
///
/// Nodes keep their drop order, which is the order the rendering layer
/// draws them in. There is exactly one logical writer at a time, so no
/// interior locking is needed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlowGraph {
    nodes: IndexMap<NodeId, FlowNode>,
    edges: Vec<FlowEdge>,
}

impl FlowGraph {
    /// Create an empty graph
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of nodes
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the number of edges
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check whether the graph holds no nodes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over the nodes in drop order
    pub fn nodes(&self) -> impl Iterator<Item = &FlowNode> {
        self.nodes.values()
    }

    /// Get all edges
    #[must_use]
    pub fn edges(&self) -> &[FlowEdge] {
        &self.edges
    }

    /// Get a node by id
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&FlowNode> {
        self.nodes.get(&id)
    }

    /// Check whether a node exists
    #[must_use]
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Add a node with a generated id and default data
    ///
    /// Never fails. Returns the stored node so the caller can read back
    /// the generated id.
    pub fn add_node(&mut self, kind: NodeKind, position: Position) -> &FlowNode {
        let node = FlowNode::new(kind, position);
        let id = node.id;
        tracing::debug!(node = %id, ?kind, "adding node");
        self.nodes.insert(id, node);
        &self.nodes[&id]
    }

    /// Merge a partial update into a node's data
    ///
    /// Only the node's `data` field is touched; position and kind stay
    /// as they are.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if `id` is not in the graph.
    pub fn update_node_data(&mut self, id: NodeId, patch: NodeDataPatch) -> Result<(), GraphError> {
        let node = self.nodes.get_mut(&id).ok_or(GraphError::NodeNotFound(id))?;
        node.data.merge(patch);
        Ok(())
    }

    /// Propose an edge under the default single-outgoing policy
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either endpoint is
    /// missing, or [`GraphError::ConnectionRejected`] if the policy
    /// refuses the proposal. The graph is unchanged on error.
    pub fn propose_edge(&mut self, params: ConnectionParams) -> Result<&FlowEdge, GraphError> {
        self.propose_edge_with(params, &SingleOutgoingPolicy::new())
    }

    /// Propose an edge under an explicit connection policy
    ///
    /// On acceptance a new edge with a generated id is appended and
    /// returned.
    ///
    /// # Errors
    ///
    /// Same as [`propose_edge`](Self::propose_edge).
    pub fn propose_edge_with<P: ConnectionPolicy>(
        &mut self,
        params: ConnectionParams,
        policy: &P,
    ) -> Result<&FlowEdge, GraphError> {
        if !self.nodes.contains_key(&params.source) {
            return Err(GraphError::NodeNotFound(params.source));
        }
        if !self.nodes.contains_key(&params.target) {
            return Err(GraphError::NodeNotFound(params.target));
        }

        if !policy.can_connect(params.source, &params.source_handle, &self.edges) {
            let reason = policy.rejection_reason(&params);
            tracing::debug!(source = %params.source, handle = %params.source_handle, "connection rejected");
            return Err(GraphError::ConnectionRejected { reason });
        }

        let edge = FlowEdge {
            id: EdgeId::new(),
            source: params.source,
            target: params.target,
            source_handle: params.source_handle,
            target_handle: params.target_handle,
        };
        tracing::debug!(edge = %edge.id, source = %edge.source, target = %edge.target, "adding edge");
        self.edges.push(edge);
        let last = self.edges.len() - 1;
        Ok(&self.edges[last])
    }

    /// Nodes with no incoming edge, in drop order
    ///
    /// With more than one node in the graph, more than one orphan makes
    /// the flow unsavable (ambiguous starting node).
    pub fn orphan_nodes(&self) -> impl Iterator<Item = &FlowNode> {
        self.nodes
            .values()
            .filter(|node| !self.edges.iter().any(|edge| edge.target == node.id))
    }

    /// Nodes with neither incoming nor outgoing edges
    pub fn isolated_nodes(&self) -> impl Iterator<Item = &FlowNode> {
        self.nodes.values().filter(|node| {
            !self
                .edges
                .iter()
                .any(|edge| edge.source == node.id || edge.target == node.id)
        })
    }

    /// Tally of nodes per kind
    #[must_use]
    pub fn node_kind_counts(&self) -> HashMap<NodeKind, usize> {
        let mut counts = HashMap::new();
        for node in self.nodes.values() {
            *counts.entry(node.kind).or_insert(0) += 1;
        }
        counts
    }
}
