mod common;

use buildmap_lib::{Graph, NodeKind};
use common::NodeBuilder;

#[test]
fn build_skips_deleted_nodes() {
    let nodes = vec![
        NodeBuilder::new(1, "A").build(),
        NodeBuilder::new(2, "B").deleted().build(),
    ];
    let graph = Graph::build(&nodes);

    assert_eq!(graph.node_count(), 1);
    assert!(graph.contains_node(1));
    assert!(!graph.contains_node(2));
    assert!(graph.node(2).is_none());
}

#[test]
fn edges_drop_targets_missing_from_snapshot() {
    let nodes = vec![
        NodeBuilder::new(1, "A").connect(99, 2.0).connect(2, 3.0).build(),
        NodeBuilder::new(2, "B").build(),
    ];
    let graph = Graph::build(&nodes);

    let edges = graph.edges(1);
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].target, 2);
    assert_eq!(edges[0].weight, 3.0);
}

#[test]
fn edges_drop_targets_pointing_at_deleted_nodes() {
    let nodes = vec![
        NodeBuilder::new(1, "A").connect(2, 1.0).connect(3, 1.0).build(),
        NodeBuilder::new(2, "B").deleted().build(),
        NodeBuilder::new(3, "C").build(),
    ];
    let graph = Graph::build(&nodes);

    let targets: Vec<_> = graph.edges(1).iter().map(|edge| edge.target).collect();
    assert_eq!(targets, vec![3]);
}

#[test]
fn edges_keep_stored_order() {
    let nodes = vec![
        NodeBuilder::new(1, "A")
            .connect(4, 1.0)
            .connect(2, 1.0)
            .connect(3, 1.0)
            .build(),
        NodeBuilder::new(2, "B").build(),
        NodeBuilder::new(3, "C").build(),
        NodeBuilder::new(4, "D").build(),
    ];
    let graph = Graph::build(&nodes);

    let targets: Vec<_> = graph.edges(1).iter().map(|edge| edge.target).collect();
    assert_eq!(targets, vec![4, 2, 3], "stored order is preserved");
}

#[test]
fn connections_are_directed_with_no_implicit_mirror() {
    let nodes = vec![
        NodeBuilder::new(1, "A").connect(2, 1.0).build(),
        NodeBuilder::new(2, "B").build(),
    ];
    let graph = Graph::build(&nodes);

    assert_eq!(graph.edges(1).len(), 1);
    assert!(graph.edges(2).is_empty(), "reverse edge must be stored explicitly");
}

#[test]
fn unknown_and_isolated_nodes_yield_empty_edges() {
    let nodes = vec![NodeBuilder::new(1, "Lonely").kind(NodeKind::Room).build()];
    let graph = Graph::build(&nodes);

    assert!(graph.edges(1).is_empty());
    assert!(graph.edges(42).is_empty());
}

#[test]
fn edge_weight_finds_first_stored_edge() {
    let nodes = vec![
        NodeBuilder::new(1, "A").connect(2, 2.5).connect(2, 9.0).build(),
        NodeBuilder::new(2, "B").build(),
    ];
    let graph = Graph::build(&nodes);

    assert_eq!(graph.edge_weight(1, 2), Some(2.5));
    assert_eq!(graph.edge_weight(2, 1), None);
}
