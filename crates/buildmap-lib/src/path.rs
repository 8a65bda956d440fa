use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::venue::NodeId;

/// Distances and predecessor map produced by a single Dijkstra run.
#[derive(Debug, Clone)]
pub struct DijkstraOutcome {
    pub distances: HashMap<NodeId, f64>,
    pub previous: HashMap<NodeId, NodeId>,
}

impl DijkstraOutcome {
    /// Tentative distance for a node; unreached nodes report infinity.
    pub fn distance(&self, id: NodeId) -> f64 {
        self.distances.get(&id).copied().unwrap_or(f64::INFINITY)
    }
}

/// Run Dijkstra's algorithm from `start`, stopping early once `end` is
/// settled. Edge weights are non-negative by construction.
///
/// Equal-cost queue entries are broken by smallest node id so that repeated
/// runs over the same snapshot are byte-identical.
pub fn shortest_path(graph: &Graph, start: NodeId, end: NodeId) -> Result<DijkstraOutcome> {
    let mut distances: HashMap<NodeId, f64> = graph
        .node_ids()
        .map(|id| (id, f64::INFINITY))
        .collect();
    let mut previous: HashMap<NodeId, NodeId> = HashMap::new();
    let mut queue = BinaryHeap::new();

    distances.insert(start, 0.0);
    queue.push(QueueEntry::new(start, 0.0));

    while let Some(entry) = queue.pop() {
        let settled = distances.get(&entry.node).copied().unwrap_or(f64::INFINITY);
        if entry.cost.0 > settled {
            // Stale entry superseded by a cheaper relaxation.
            continue;
        }

        if entry.node == end {
            break;
        }

        for edge in graph.edges(entry.node) {
            let candidate = settled + edge.weight;
            if candidate < distances.get(&edge.target).copied().unwrap_or(f64::INFINITY) {
                distances.insert(edge.target, candidate);
                previous.insert(edge.target, entry.node);
                queue.push(QueueEntry::new(edge.target, candidate));
            }
        }
    }

    let outcome = DijkstraOutcome {
        distances,
        previous,
    };

    if outcome.distance(end).is_infinite() {
        return Err(Error::NoPathExists { start, end });
    }

    Ok(outcome)
}

/// Walk the predecessor map backwards from `end` into an ordered node id
/// sequence.
pub fn reconstruct_path(previous: &HashMap<NodeId, NodeId>, end: NodeId) -> Vec<NodeId> {
    let mut path = vec![end];
    let mut current = end;
    while let Some(&parent) = previous.get(&current) {
        path.push(parent);
        current = parent;
    }
    path.reverse();
    path
}

/// A reconstructed path only counts when it actually connects the requested
/// endpoints; a chain that stops short means the engine ran on a
/// disconnected region.
pub fn path_connects(path: &[NodeId], start: NodeId, end: NodeId) -> bool {
    path.first() == Some(&start) && path.last() == Some(&end)
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: NodeId,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(node: NodeId, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
