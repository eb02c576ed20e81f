//! The editing session
//!
//! [`FlowSession`] owns one [`FlowGraph`] plus the application state the
//! rendering layer should not keep for itself: the current selection,
//! the sidebar panel mode, and the status notice. Commands are applied
//! synchronously, one at a time; there is exactly one logical writer.

use crate::command::FlowCommand;
use crate::error::SessionError;
use chatflow_core::{
    EdgeId, FlowGraph, FlowSnapshot, FlowValidator, GraphError, NodeId, SingleOutgoingPolicy,
};
use serde::{Deserialize, Serialize};

/// Which sidebar panel is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelMode {
    /// The node palette (nothing selected)
    #[default]
    Palette,
    /// The settings editor for the selected node
    Settings,
}

/// A transient message for the status bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusNotice {
    /// Text shown to the user
    pub message: String,
    /// Whether the notice reports a failure
    pub is_error: bool,
}

impl StatusNotice {
    fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
        }
    }

    fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
        }
    }
}

/// What a command did
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    /// A node was created
    NodeAdded(NodeId),
    /// An edge was accepted and appended
    Connected(EdgeId),
    /// The connection policy refused the edge; see the status notice
    ConnectionRefused,
    /// A node's data was updated
    NodeUpdated(NodeId),
    /// Selection (and panel mode) changed
    SelectionChanged(Option<NodeId>),
    /// Validation passed and a snapshot was exported
    Saved(FlowSnapshot),
    /// Validation failed; see the status notice
    SaveRejected,
}

/// One editing session over a flow graph
///
/// # Example
///
/// ```
/// use chatflow_core::{NodeKind, Position};
/// use chatflow_session::{FlowCommand, FlowSession, SessionOutcome};
///
/// let mut session = FlowSession::new();
/// let outcome = session.apply(FlowCommand::AddNode {
///     kind: NodeKind::Message,
///     position: Position::new(40.0, 80.0),
/// })?;
/// assert!(matches!(outcome, SessionOutcome::NodeAdded(_)));
///
/// let outcome = session.apply(FlowCommand::Save)?;
/// assert!(matches!(outcome, SessionOutcome::Saved(_)));
/// # Ok::<(), chatflow_session::SessionError>(())
/// ```
#[derive(Debug, Default)]
pub struct FlowSession {
    graph: FlowGraph,
    policy: SingleOutgoingPolicy,
    validator: FlowValidator,
    selection: Option<NodeId>,
    panel: PanelMode,
    status: Option<StatusNotice>,
}

impl FlowSession {
    /// Create a session over an empty graph
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session over an existing graph
    #[must_use]
    pub fn with_graph(graph: FlowGraph) -> Self {
        Self {
            graph,
            ..Self::default()
        }
    }

    /// Read-only projection of the graph for drawing
    #[must_use]
    pub fn graph(&self) -> &FlowGraph {
        &self.graph
    }

    /// Currently selected node, if any
    #[must_use]
    pub fn selection(&self) -> Option<NodeId> {
        self.selection
    }

    /// Which sidebar panel should be showing
    #[must_use]
    pub fn panel_mode(&self) -> PanelMode {
        self.panel
    }

    /// Current status notice, if any
    #[must_use]
    pub fn status(&self) -> Option<&StatusNotice> {
        self.status.as_ref()
    }

    /// Apply one command to the session
    ///
    /// Policy rejections and validation failures are reported as
    /// outcomes with a status notice, not as errors; the graph is
    /// unchanged in those cases.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when a command references a node that
    /// does not exist. That indicates a stale id from the caller, not a
    /// user mistake.
    pub fn apply(&mut self, command: FlowCommand) -> Result<SessionOutcome, SessionError> {
        match command {
            FlowCommand::AddNode { kind, position } => {
                let id = self.graph.add_node(kind, position).id;
                tracing::info!(node = %id, "node added");
                self.status = None;
                Ok(SessionOutcome::NodeAdded(id))
            }
            FlowCommand::Connect(params) => match self.graph.propose_edge_with(params, &self.policy) {
                Ok(edge) => {
                    let id = edge.id;
                    self.status = None;
                    Ok(SessionOutcome::Connected(id))
                }
                Err(err) if err.is_rejection() => {
                    tracing::info!("connection refused: {err}");
                    self.status = Some(StatusNotice::error(err.to_string()));
                    Ok(SessionOutcome::ConnectionRefused)
                }
                Err(err) => Err(err.into()),
            },
            FlowCommand::EditText { node, patch } => {
                self.graph.update_node_data(node, patch).map_err(|err| match err {
                    GraphError::NodeNotFound(id) => SessionError::UnknownNode(id),
                    other => SessionError::Graph(other),
                })?;
                self.status = None;
                Ok(SessionOutcome::NodeUpdated(node))
            }
            FlowCommand::Select { node } => {
                if !self.graph.contains_node(node) {
                    return Err(SessionError::UnknownNode(node));
                }
                self.selection = Some(node);
                self.panel = PanelMode::Settings;
                Ok(SessionOutcome::SelectionChanged(self.selection))
            }
            FlowCommand::ClearSelection => {
                self.selection = None;
                self.panel = PanelMode::Palette;
                Ok(SessionOutcome::SelectionChanged(None))
            }
            FlowCommand::Save => Ok(self.save()),
        }
    }

    /// Validate the flow and, if savable, export a snapshot
    ///
    /// Persistence to a backend is out of scope; the exported snapshot
    /// is logged and handed back to the caller.
    fn save(&mut self) -> SessionOutcome {
        let report = self.validator.validate(&self.graph);
        if !report.is_valid {
            tracing::warn!("save rejected: {}", report.error_message);
            self.status = Some(StatusNotice::error(report.error_message));
            return SessionOutcome::SaveRejected;
        }

        let snapshot = FlowSnapshot::capture(&self.graph);
        match snapshot.to_json() {
            Ok(json) => tracing::info!(
                nodes = snapshot.metadata.node_count,
                edges = snapshot.metadata.edge_count,
                "saving flow: {json}"
            ),
            Err(err) => tracing::warn!("snapshot not serializable: {err}"),
        }

        self.status = Some(StatusNotice::info("Flow saved successfully!"));
        SessionOutcome::Saved(snapshot)
    }
}
