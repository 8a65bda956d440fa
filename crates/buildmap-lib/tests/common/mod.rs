// Shared fixture helpers for `buildmap-lib` integration tests.
#![allow(dead_code)]

use buildmap_lib::{Connection, FacingDirection, FloorRef, Node, NodeId, NodeKind, VenueSnapshot};

/// Ground floor used by most fixtures.
pub fn ground_floor() -> FloorRef {
    FloorRef {
        id: 1,
        level: Some(1),
        name: "Ground".to_string(),
    }
}

pub fn floor(id: i64, level: Option<i32>, name: &str) -> FloorRef {
    FloorRef {
        id,
        level,
        name: name.to_string(),
    }
}

/// Builder to create `Node` instances in tests with sensible defaults.
pub struct NodeBuilder {
    node: Node,
}

impl NodeBuilder {
    #[must_use]
    pub fn new(id: NodeId, name: &str) -> Self {
        Self {
            node: Node {
                id,
                name: name.to_string(),
                kind: NodeKind::Corridor,
                x: 0.0,
                y: 0.0,
                facing: None,
                floor: ground_floor(),
                deleted: false,
                connections: Vec::new(),
            },
        }
    }

    pub fn kind(mut self, kind: NodeKind) -> Self {
        self.node.kind = kind;
        self
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.node.x = x;
        self.node.y = y;
        self
    }

    pub fn facing(mut self, direction: FacingDirection) -> Self {
        self.node.facing = Some(direction);
        self
    }

    pub fn on(mut self, floor: FloorRef) -> Self {
        self.node.floor = floor;
        self
    }

    pub fn deleted(mut self) -> Self {
        self.node.deleted = true;
        self
    }

    pub fn connect(mut self, target: NodeId, weight: f64) -> Self {
        self.node.connections.push(Connection { target, weight });
        self
    }

    pub fn build(self) -> Node {
        self.node
    }
}

pub fn snapshot(nodes: Vec<Node>) -> VenueSnapshot {
    VenueSnapshot {
        venue_id: 1,
        name: "Test Venue".to_string(),
        nodes,
    }
}

/// The worked scenario from the design discussion: A(0,0) facing right,
/// B(1,0), C(1,1), unit weights, one floor.
pub fn elbow_snapshot() -> VenueSnapshot {
    snapshot(vec![
        NodeBuilder::new(1, "A")
            .at(0.0, 0.0)
            .facing(FacingDirection::Right)
            .connect(2, 1.0)
            .build(),
        NodeBuilder::new(2, "B").at(1.0, 0.0).connect(3, 1.0).build(),
        NodeBuilder::new(3, "C").at(1.0, 1.0).build(),
    ])
}
