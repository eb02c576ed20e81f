//! Connection policies
//!
//! A policy decides whether a proposed edge may be added, given the
//! edges that already exist. The default (and only) policy enforces the
//! single-outgoing-connection rule: each source handle may originate at
//! most one edge.

use crate::edge::{ConnectionParams, FlowEdge, HandleId};
use crate::id::NodeId;

/// Decides whether a proposed connection may be added
///
/// Policies inspect only the proposal and the existing edges; they never
/// mutate the graph.
pub trait ConnectionPolicy {
    /// Check whether an edge from `(source, source_handle)` may be added
    fn can_connect(&self, source: NodeId, source_handle: &HandleId, edges: &[FlowEdge]) -> bool;

    /// Human-readable reason reported when a proposal is refused
    fn rejection_reason(&self, params: &ConnectionParams) -> String;
}

/// One outgoing connection per source handle
///
/// # Characteristics
/// - Keyed on the source side only
/// - Target-side duplication is not policed: fan-in and self-loops pass
/// - Total over its inputs; never fails
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleOutgoingPolicy;

impl SingleOutgoingPolicy {
    /// Create new single-outgoing policy
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ConnectionPolicy for SingleOutgoingPolicy {
    fn can_connect(&self, source: NodeId, source_handle: &HandleId, edges: &[FlowEdge]) -> bool {
        !edges
            .iter()
            .any(|edge| edge.source == source && edge.source_handle == *source_handle)
    }

    fn rejection_reason(&self, _params: &ConnectionParams) -> String {
        "Each node can only have one outgoing connection".to_string()
    }
}
