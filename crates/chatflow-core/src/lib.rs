//! Chatflow Core - Flow graph store and validation
//!
//! The UI-agnostic heart of a drag-and-drop chatbot flow builder:
//! - Holds the nodes and edges of one editing session
//! - Gates new edges through a connection policy
//! - Decides savability at save time (single starting node)
//! - Exports version-tagged snapshots for persistence
//!
//! Rendering, drag mechanics and panel switching live entirely outside
//! this crate; it consumes and produces only plain data.
//!
//! # Example
//!
//! ```
//! use chatflow_core::{
//!     ConnectionParams, FlowGraph, FlowSnapshot, FlowValidator, NodeKind, Position,
//! };
//!
//! let mut graph = FlowGraph::new();
//! let greet = graph.add_node(NodeKind::Message, Position::new(0.0, 0.0)).id;
//! let reply = graph.add_node(NodeKind::Message, Position::new(250.0, 0.0)).id;
//! graph.propose_edge(ConnectionParams::between(greet, reply))?;
//!
//! let report = FlowValidator::new().validate(&graph);
//! assert!(report.is_valid);
//!
//! let snapshot = FlowSnapshot::capture(&graph);
//! assert_eq!(snapshot.metadata.node_count, 2);
//! # Ok::<(), chatflow_core::GraphError>(())
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod edge;
pub mod error;
pub mod graph;
pub mod id;
pub mod node;
pub mod policy;
pub mod snapshot;
pub mod validate;

// Re-exports for convenience
pub use edge::{ConnectionParams, FlowEdge, HandleId};
pub use error::{GraphError, ValidationError};
pub use graph::FlowGraph;
pub use id::{EdgeId, NodeId};
pub use node::{
    FlowNode, NodeData, NodeDataPatch, NodeKind, Position, DEFAULT_NODE_LABEL, DEFAULT_NODE_TEXT,
};
pub use policy::{ConnectionPolicy, SingleOutgoingPolicy};
pub use snapshot::{FlowSnapshot, SnapshotMetadata, SNAPSHOT_VERSION};
pub use validate::{FlowValidator, Validation};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with Chatflow Core
    pub use crate::{
        ConnectionParams, FlowEdge, FlowGraph, FlowNode, FlowSnapshot, FlowValidator, NodeDataPatch,
        NodeId, NodeKind, Position,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
