//! Chatflow Session - Command-driven editing over the flow core
//!
//! The rendering layer translates user gestures (drop, drag-connect,
//! typing, clicks) into [`FlowCommand`]s and applies them to a
//! [`FlowSession`]. The session owns the graph, the selection, the
//! sidebar panel mode, and the status notice; everything it returns is
//! plain data the UI can draw from.
//!
//! # Example
//!
//! ```
//! use chatflow_core::{ConnectionParams, NodeKind, Position};
//! use chatflow_session::{FlowCommand, FlowSession, SessionOutcome};
//!
//! let mut session = FlowSession::new();
//!
//! let SessionOutcome::NodeAdded(greet) = session.apply(FlowCommand::AddNode {
//!     kind: NodeKind::Message,
//!     position: Position::new(0.0, 0.0),
//! })? else { unreachable!() };
//! let SessionOutcome::NodeAdded(reply) = session.apply(FlowCommand::AddNode {
//!     kind: NodeKind::Message,
//!     position: Position::new(250.0, 0.0),
//! })? else { unreachable!() };
//!
//! session.apply(FlowCommand::Connect(ConnectionParams::between(greet, reply)))?;
//! let outcome = session.apply(FlowCommand::Save)?;
//! assert!(matches!(outcome, SessionOutcome::Saved(_)));
//! # Ok::<(), chatflow_session::SessionError>(())
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod command;
pub mod error;
pub mod session;

// Re-exports for convenience
pub use command::FlowCommand;
pub use error::SessionError;
pub use session::{FlowSession, PanelMode, SessionOutcome, StatusNotice};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
