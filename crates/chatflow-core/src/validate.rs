//! Save-time flow validation
//!
//! A flow is interpreted as one or more chains rooted at a single entry
//! node. More than one node without an incoming edge means the flow is
//! ambiguous about where the conversation starts, so it cannot be saved.
//!
//! The check is intentionally shallow: no cycle detection and no
//! reachability analysis beyond the orphan census. Disconnected
//! components are still caught, since each contributes at least one
//! orphan.

use crate::error::ValidationError;
use crate::graph::FlowGraph;

/// Outcome of a validation run, in report form
///
/// The session layer surfaces `error_message` directly in the status
/// bar; callers that prefer `?` should use
/// [`FlowValidator::validate_strict`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    /// Whether the flow may be saved
    pub is_valid: bool,
    /// Human-readable failure description; empty when valid
    pub error_message: String,
}

impl Validation {
    fn valid() -> Self {
        Self {
            is_valid: true,
            error_message: String::new(),
        }
    }
}

/// Savability validation for a flow graph
///
/// Rule: with more than one node in the graph, at most one node may
/// have no incoming edge.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlowValidator;

impl FlowValidator {
    /// Create new validator instance
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Validate the graph, producing a report
    #[must_use]
    pub fn validate(&self, graph: &FlowGraph) -> Validation {
        match self.validate_strict(graph) {
            Ok(()) => Validation::valid(),
            Err(err) => Validation {
                is_valid: false,
                error_message: err.to_string(),
            },
        }
    }

    /// Validate the graph, producing an error on failure
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MultipleStartNodes`] when more than
    /// one node has no incoming edge (and the graph has more than one
    /// node).
    pub fn validate_strict(&self, graph: &FlowGraph) -> Result<(), ValidationError> {
        // A lone node (or an empty canvas) is trivially savable.
        if graph.node_count() <= 1 {
            return Ok(());
        }

        let orphan_count = graph.orphan_nodes().count();
        if orphan_count > 1 {
            return Err(ValidationError::MultipleStartNodes { orphan_count });
        }

        Ok(())
    }
}
