//! Session commands
//!
//! Every user gesture the core cares about arrives as one discrete
//! command, consumed synchronously. There is no asynchronous control
//! flow; the domain logic never blocks.

use chatflow_core::{ConnectionParams, NodeDataPatch, NodeId, NodeKind, Position};
use serde::{Deserialize, Serialize};

/// A discrete editing action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum FlowCommand {
    /// Drop a new node onto the canvas
    AddNode {
        /// Kind of node to create
        kind: NodeKind,
        /// Drop position in flow coordinates
        position: Position,
    },
    /// Finish a drag between two handles
    Connect(ConnectionParams),
    /// Edit the selected-or-named node's data from the settings panel
    EditText {
        /// Node being edited
        node: NodeId,
        /// Fields to merge
        patch: NodeDataPatch,
    },
    /// Select a node (switches the sidebar to the settings panel)
    Select {
        /// Node to select
        node: NodeId,
    },
    /// Clear the selection (click on empty canvas)
    ClearSelection,
    /// Validate and, if savable, export the flow
    Save,
}
