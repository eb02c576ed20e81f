//! End-to-end command scripts against a session: build a small flow,
//! hit the guard rails, fix the graph, save.

use chatflow_core::{ConnectionParams, NodeDataPatch, NodeKind, Position};
use chatflow_session::{FlowCommand, FlowSession, PanelMode, SessionOutcome};
use chatflow_test_utils::{chain_graph, disconnected_graph, fan_in_graph};
use pretty_assertions::assert_eq;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("chatflow_session=debug,chatflow_core=debug")
        .with_test_writer()
        .try_init();
}

fn drop_node(session: &mut FlowSession) -> chatflow_core::NodeId {
    match session
        .apply(FlowCommand::AddNode {
            kind: NodeKind::Message,
            position: Position::new(0.0, 0.0),
        })
        .unwrap()
    {
        SessionOutcome::NodeAdded(id) => id,
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn test_build_edit_and_save_a_two_message_flow() {
    init_tracing();
    let mut session = FlowSession::new();

    let greet = drop_node(&mut session);
    let reply = drop_node(&mut session);

    // Edit the first message from the settings panel.
    session.apply(FlowCommand::Select { node: greet }).unwrap();
    assert_eq!(session.panel_mode(), PanelMode::Settings);
    session
        .apply(FlowCommand::EditText {
            node: greet,
            patch: NodeDataPatch::new()
                .with_label("Greeting")
                .with_text("Hi! How can I help?"),
        })
        .unwrap();

    session
        .apply(FlowCommand::Connect(ConnectionParams::between(greet, reply)))
        .unwrap();

    let outcome = session.apply(FlowCommand::Save).unwrap();
    let SessionOutcome::Saved(snapshot) = outcome else {
        panic!("expected a saved snapshot");
    };

    assert_eq!(snapshot.metadata.node_count, 2);
    assert_eq!(snapshot.metadata.edge_count, 1);
    let greeting = snapshot.nodes.iter().find(|n| n.id == greet).unwrap();
    assert_eq!(greeting.data.text, "Hi! How can I help?");
}

#[test]
fn test_mis_connect_then_fix_then_save() {
    init_tracing();
    let mut session = FlowSession::new();
    let n1 = drop_node(&mut session);
    let n2 = drop_node(&mut session);
    let n3 = drop_node(&mut session);

    session
        .apply(FlowCommand::Connect(ConnectionParams::between(n1, n2)))
        .unwrap();

    // Second outgoing edge from n1 is refused and reported.
    let outcome = session
        .apply(FlowCommand::Connect(ConnectionParams::between(n1, n3)))
        .unwrap();
    assert_eq!(outcome, SessionOutcome::ConnectionRefused);
    assert!(session.status().unwrap().is_error);

    // n3 is still an orphan, so saving fails too.
    assert_eq!(
        session.apply(FlowCommand::Save).unwrap(),
        SessionOutcome::SaveRejected
    );

    // Chain n3 behind n2 and the flow becomes savable.
    session
        .apply(FlowCommand::Connect(ConnectionParams::between(n2, n3)))
        .unwrap();
    assert!(session.status().is_none());
    assert!(matches!(
        session.apply(FlowCommand::Save).unwrap(),
        SessionOutcome::Saved(_)
    ));
}

#[test]
fn test_session_over_prebuilt_chain_saves() {
    let (graph, ids) = chain_graph(5);
    let mut session = FlowSession::with_graph(graph);

    assert_eq!(session.graph().node_count(), ids.len());
    assert!(matches!(
        session.apply(FlowCommand::Save).unwrap(),
        SessionOutcome::Saved(_)
    ));
}

#[test]
fn test_fan_in_counts_every_source_as_orphan() {
    // Three sources feeding one sink: three orphans, unsavable.
    let (graph, sources, _sink) = fan_in_graph(3);
    let mut session = FlowSession::with_graph(graph);

    assert_eq!(
        session.apply(FlowCommand::Save).unwrap(),
        SessionOutcome::SaveRejected
    );
    let message = &session.status().unwrap().message;
    assert!(message.contains(&format!("{} nodes", sources.len())));
}

#[test]
fn test_disconnected_canvas_is_unsavable_until_linked() {
    let (graph, ids) = disconnected_graph(3);
    let mut session = FlowSession::with_graph(graph);

    assert_eq!(
        session.apply(FlowCommand::Save).unwrap(),
        SessionOutcome::SaveRejected
    );

    session
        .apply(FlowCommand::Connect(ConnectionParams::between(ids[0], ids[1])))
        .unwrap();
    session
        .apply(FlowCommand::Connect(ConnectionParams::between(ids[1], ids[2])))
        .unwrap();

    assert!(matches!(
        session.apply(FlowCommand::Save).unwrap(),
        SessionOutcome::Saved(_)
    ));
}
