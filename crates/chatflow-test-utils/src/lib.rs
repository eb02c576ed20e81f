//! Testing utilities for the Chatflow workspace
//!
//! Shared graph fixtures: chains, fan-ins and disconnected sets.

#![allow(missing_docs)]

use chatflow_core::{ConnectionParams, FlowGraph, NodeId, NodeKind, Position};

/// Add one message node at a throwaway position, returning its id.
pub fn add_message_node(graph: &mut FlowGraph) -> NodeId {
    let count = graph.node_count() as f64;
    graph
        .add_node(NodeKind::Message, Position::new(count * 200.0, 0.0))
        .id
}

/// Build a linear chain `n0 -> n1 -> ... -> n(len-1)`.
///
/// A chain is always savable: only the head is an orphan.
pub fn chain_graph(len: usize) -> (FlowGraph, Vec<NodeId>) {
    let mut graph = FlowGraph::new();
    let ids: Vec<NodeId> = (0..len).map(|_| add_message_node(&mut graph)).collect();
    for pair in ids.windows(2) {
        graph
            .propose_edge(ConnectionParams::between(pair[0], pair[1]))
            .unwrap();
    }
    (graph, ids)
}

/// Build `sources -> sink` fan-in: every source targets the one sink.
pub fn fan_in_graph(sources: usize) -> (FlowGraph, Vec<NodeId>, NodeId) {
    let mut graph = FlowGraph::new();
    let source_ids: Vec<NodeId> = (0..sources).map(|_| add_message_node(&mut graph)).collect();
    let sink = add_message_node(&mut graph);
    for &source in &source_ids {
        graph
            .propose_edge(ConnectionParams::between(source, sink))
            .unwrap();
    }
    (graph, source_ids, sink)
}

/// Build `count` nodes with no edges at all.
pub fn disconnected_graph(count: usize) -> (FlowGraph, Vec<NodeId>) {
    let mut graph = FlowGraph::new();
    let ids = (0..count).map(|_| add_message_node(&mut graph)).collect();
    (graph, ids)
}
