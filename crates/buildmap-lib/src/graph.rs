use std::collections::HashMap;

use tracing::debug;

use crate::venue::{Node, NodeId};

/// Directed edge within the routing graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub target: NodeId,
    pub weight: f64,
}

/// Per-request adjacency structure built from a venue's node snapshot.
///
/// Deleted nodes are dropped, as is any stored connection whose target is
/// missing from the snapshot or deleted, so the graph never holds an edge to
/// an absent node. Edges keep their original stored order; nothing is
/// mirrored implicitly.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: HashMap<NodeId, Node>,
    adjacency: HashMap<NodeId, Vec<Edge>>,
}

impl Graph {
    /// Build the graph for one venue from its full node list.
    pub fn build(nodes: &[Node]) -> Self {
        let retained: HashMap<NodeId, Node> = nodes
            .iter()
            .filter(|node| !node.deleted)
            .map(|node| (node.id, node.clone()))
            .collect();

        let mut adjacency: HashMap<NodeId, Vec<Edge>> = HashMap::new();
        for node in retained.values() {
            let edges = node
                .connections
                .iter()
                .filter(|conn| retained.contains_key(&conn.target))
                .map(|conn| Edge {
                    target: conn.target,
                    weight: conn.weight,
                })
                .collect();
            adjacency.insert(node.id, edges);
        }

        debug!(nodes = retained.len(), "built routing graph");
        Self {
            nodes: retained,
            adjacency,
        }
    }

    /// Whether the snapshot contains a live node with this id.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Look up a node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Outgoing edges for a node, in stored order. Unknown or isolated ids
    /// yield an empty slice rather than an error.
    pub fn edges(&self, id: NodeId) -> &[Edge] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Weight of the first stored edge between two ids, if one exists.
    pub fn edge_weight(&self, from: NodeId, to: NodeId) -> Option<f64> {
        self.edges(from)
            .iter()
            .find(|edge| edge.target == to)
            .map(|edge| edge.weight)
    }

    /// Number of live nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Iterate over all live nodes.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Ids of all live nodes.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }
}
