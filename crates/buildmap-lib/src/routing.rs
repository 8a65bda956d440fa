//! Route computation pipeline.
//!
//! This module provides:
//! - [`RouteRequest`] - endpoints of a navigation query
//! - [`Route`] - computed path, total distance, and narrated steps
//! - [`route`] - main entry point: build graph, validate, run Dijkstra,
//!   reconstruct, narrate
//!
//! The whole pipeline is synchronous and request-scoped: it operates only on
//! structures built from the supplied snapshot, holds no external resources,
//! and leaves nothing behind once the result is returned.

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::narration::{narrate, Step};
use crate::path::{path_connects, reconstruct_path, shortest_path};
use crate::venue::{FloorId, Node, NodeId, NodeKind, VenueSnapshot};

/// Endpoints of a navigation query. Both ids must belong to the snapshot's
/// venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRequest {
    pub start: NodeId,
    pub end: NodeId,
}

impl RouteRequest {
    pub fn new(start: NodeId, end: NodeId) -> Self {
        Self { start, end }
    }
}

/// Flattened view of a node along a computed route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeSummary {
    pub id: NodeId,
    pub name: String,
    pub kind: NodeKind,
    pub floor_id: FloorId,
    pub x: f64,
    pub y: f64,
}

impl From<&Node> for NodeSummary {
    fn from(node: &Node) -> Self {
        Self {
            id: node.id,
            name: node.name.clone(),
            kind: node.kind,
            floor_id: node.floor.id,
            x: node.x,
            y: node.y,
        }
    }
}

/// Computed route returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct Route {
    pub start: NodeId,
    pub end: NodeId,
    pub path: Vec<NodeSummary>,
    pub total_distance: f64,
    pub steps: Vec<Step>,
}

impl Route {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Reject a query whose endpoints are unknown or identical. Reachability is
/// the engine's concern, not the validator's.
pub fn validate_request(graph: &Graph, start: NodeId, end: NodeId) -> Result<()> {
    if !graph.contains_node(start) {
        return Err(Error::NodeNotFound { id: start });
    }
    if !graph.contains_node(end) {
        return Err(Error::NodeNotFound { id: end });
    }
    if start == end {
        return Err(Error::SameEndpoints);
    }
    Ok(())
}

/// Compute the shortest route through a venue snapshot and narrate it.
///
/// Pipeline: build the graph (dropping deleted nodes and dangling edges),
/// validate the endpoints, run Dijkstra, reconstruct and verify the path,
/// then synthesize turn-by-turn steps.
pub fn route(snapshot: &VenueSnapshot, request: &RouteRequest) -> Result<Route> {
    let graph = Graph::build(&snapshot.nodes);
    debug!(
        venue = snapshot.venue_id,
        nodes = graph.node_count(),
        start = request.start,
        end = request.end,
        "routing request"
    );

    validate_request(&graph, request.start, request.end)?;

    let outcome = shortest_path(&graph, request.start, request.end)?;
    let path = reconstruct_path(&outcome.previous, request.end);

    // The engine may have been run on a disconnected region; a chain that
    // stops short of the start is no path at all.
    if !path_connects(&path, request.start, request.end) {
        return Err(Error::NoPathExists {
            start: request.start,
            end: request.end,
        });
    }

    let total_distance = outcome.distance(request.end);
    let steps = narrate(&graph, &path);

    let summaries = path
        .iter()
        .filter_map(|id| graph.node(*id))
        .map(NodeSummary::from)
        .collect::<Vec<_>>();

    debug!(
        hops = summaries.len().saturating_sub(1),
        total_distance,
        steps = steps.len(),
        "route computed"
    );

    Ok(Route {
        start: request.start,
        end: request.end,
        path: summaries,
        total_distance,
        steps,
    })
}
