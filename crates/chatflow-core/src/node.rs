//! Node model for the flow graph
//!
//! A node represents one outgoing chat message in the flow. Nodes are
//! created when the user drops a palette entry onto the canvas and are
//! mutated only through [`NodeDataPatch`] merges from the settings panel.

use crate::id::NodeId;
use serde::{Deserialize, Serialize};

/// Default label for a freshly dropped message node
pub const DEFAULT_NODE_LABEL: &str = "New Text Message";

/// Default body text for a freshly dropped message node
pub const DEFAULT_NODE_TEXT: &str = "Enter your message here...";

/// Kind of node in the flow
///
/// Only message nodes exist in the current palette; the enum is
/// non-exhaustive so further kinds stay additive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum NodeKind {
    /// A text message sent to the end user
    #[default]
    Message,
}

impl NodeKind {
    /// Get a display name for the node kind
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            NodeKind::Message => "Message",
        }
    }
}

/// Canvas position of a node, in flow coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Create a new position
    #[inline]
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Editable payload of a node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeData {
    /// Short label shown on the node card
    pub label: String,
    /// Message text sent in the chat flow
    pub text: String,
}

impl Default for NodeData {
    fn default() -> Self {
        Self {
            label: DEFAULT_NODE_LABEL.to_string(),
            text: DEFAULT_NODE_TEXT.to_string(),
        }
    }
}

impl NodeData {
    /// Merge a partial update into this data, field by field
    ///
    /// Absent fields are left untouched.
    pub fn merge(&mut self, patch: NodeDataPatch) {
        if let Some(label) = patch.label {
            self.label = label;
        }
        if let Some(text) = patch.text {
            self.text = text;
        }
    }
}

/// Partial update for [`NodeData`]
///
/// The settings panel sends one of these on every keystroke; only the
/// populated fields are applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct NodeDataPatch {
    /// New label, if changed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// New message text, if changed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl NodeDataPatch {
    /// Create an empty patch
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With a new label
    #[inline]
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// With new message text
    #[inline]
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Check whether the patch changes anything
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.label.is_none() && self.text.is_none()
    }
}

/// A node in the flow graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowNode {
    /// Unique identity within the graph
    pub id: NodeId,
    /// Kind of node
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Canvas position
    pub position: Position,
    /// Editable payload
    pub data: NodeData,
}

impl FlowNode {
    /// Create a node with a generated id and default data
    #[must_use]
    pub fn new(kind: NodeKind, position: Position) -> Self {
        Self {
            id: NodeId::new(),
            kind,
            position,
            data: NodeData::default(),
        }
    }
}
