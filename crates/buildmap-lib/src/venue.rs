use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// Numeric identifier for a navigable node.
pub type NodeId = i64;

/// Numeric identifier for a floor.
pub type FloorId = i64;

/// Closed set of node categories found in venue plans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Room,
    Corridor,
    Stairs,
    Elevator,
    Entrance,
    Hall,
    Restroom,
    Kitchen,
    Reception,
    EmergencyExit,
    Landmark,
}

impl NodeKind {
    /// Corridor nodes are connective tissue and never serve as landmarks.
    pub fn is_corridor(self) -> bool {
        matches!(self, NodeKind::Corridor)
    }

    /// Stairs and elevators move between floors rather than along one.
    pub fn is_vertical_transit(self) -> bool {
        matches!(self, NodeKind::Stairs | NodeKind::Elevator)
    }
}

/// Default orientation assumed when arriving at a node.
///
/// Coordinates are screen-oriented: y grows downwards, so `Up` maps to
/// (0, -1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FacingDirection {
    Up,
    Right,
    Down,
    Left,
}

impl FacingDirection {
    /// Unit vector for this direction in floor coordinates.
    pub fn unit_vector(self) -> (f64, f64) {
        match self {
            FacingDirection::Up => (0.0, -1.0),
            FacingDirection::Right => (1.0, 0.0),
            FacingDirection::Down => (0.0, 1.0),
            FacingDirection::Left => (-1.0, 0.0),
        }
    }
}

/// Reference to the floor a node sits on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorRef {
    pub id: FloorId,
    /// Numeric level within the venue, when the plan defines one.
    #[serde(default)]
    pub level: Option<i32>,
    pub name: String,
}

/// Directed, weighted edge stored on its source node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub target: NodeId,
    /// Weight defaults to 1.0 when the stored record omits it.
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

/// A navigable point on one floor of a venue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    pub kind: NodeKind,
    /// Normalized 0..1 coordinates within the floor plan.
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub facing: Option<FacingDirection>,
    pub floor: FloorRef,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

impl Node {
    /// Coordinate distance to another node, ignoring floors.
    pub fn distance_to(&self, other: &Node) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx.hypot(dy)
    }
}

/// Eagerly loaded node set for one venue, spanning all of its floors.
///
/// The collaborator that owns persistence produces one snapshot per request;
/// the core never fetches more data mid-computation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VenueSnapshot {
    pub venue_id: i64,
    pub name: String,
    pub nodes: Vec<Node>,
}

/// Load a venue snapshot from a JSON file.
pub fn load_snapshot(path: &Path) -> Result<VenueSnapshot> {
    let raw = std::fs::read_to_string(path)?;
    let snapshot: VenueSnapshot = serde_json::from_str(&raw)?;
    debug!(
        venue = snapshot.venue_id,
        nodes = snapshot.nodes.len(),
        "loaded venue snapshot"
    );
    Ok(snapshot)
}
