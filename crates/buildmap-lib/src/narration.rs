//! Turn-by-turn narration of a computed path.
//!
//! The narrator walks consecutive (from, to) pairs of the path, carrying the
//! last non-zero movement vector as the current heading, and emits discrete
//! instructions: forward runs (merged across straight segments), turns,
//! U-turns, and floor changes. Steps pick up a nearby-landmark sentence when
//! a usable candidate is found.

use serde::{Deserialize, Serialize};

use crate::graph::Graph;
use crate::venue::{FacingDirection, FloorId, Node, NodeId};

/// Landmarks further than this (in normalized floor units) are ignored.
const LANDMARK_RADIUS: f64 = 0.1;

/// Heading deviations at or below this many degrees read as "straight on".
const STRAIGHT_THRESHOLD_DEG: f64 = 20.0;

/// Deviations at or above this many degrees read as a U-turn.
const U_TURN_THRESHOLD_DEG: f64 = 135.0;

const ZERO_EPSILON: f64 = 1e-9;

/// Kind of instruction within a narrated route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StepKind {
    GoForward,
    TurnLeft,
    TurnRight,
    UTurn,
    ChangeFloorUp,
    ChangeFloorDown,
}

/// One instruction unit of a narrated route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub kind: StepKind,
    pub text: String,
    pub from: NodeId,
    pub to: NodeId,
    pub floor: FloorId,
    /// Accumulated forward distance; only present on `GoForward` steps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<u32>,
}

/// Synthesize the instruction list for an ordered path of node ids.
///
/// Every id must come from `graph`; paths shorter than two nodes narrate to
/// nothing.
pub fn narrate(graph: &Graph, path: &[NodeId]) -> Vec<Step> {
    let nodes: Vec<&Node> = path.iter().filter_map(|id| graph.node(*id)).collect();

    let mut steps = Vec::new();
    if nodes.len() < 2 {
        return steps;
    }

    let mut heading: Option<Vec2> = None;
    let mut after_floor_change = false;

    for (i, pair) in nodes.windows(2).enumerate() {
        let (from, to) = (pair[0], pair[1]);

        if from.floor.id != to.floor.id {
            steps.push(floor_change_step(graph, from, to));
            // The next segment starts from scratch on the new floor.
            heading = None;
            after_floor_change = true;
            continue;
        }

        let movement = Vec2::between(from, to);
        if movement.is_zero() {
            // Co-located nodes: nothing to say, and the carried heading
            // stays as it was.
            continue;
        }

        let baseline = if i == 0 || after_floor_change || heading.is_none() {
            from.facing.map(Vec2::from_facing)
        } else {
            heading
        };

        if let Some(base) = baseline {
            if let Some(step) = turn_step(graph, base, movement, from, to) {
                steps.push(step);
            }
        }

        let distance = forward_distance(graph, from, to);
        if distance > 0 {
            append_forward_step(&mut steps, distance as u32, from, to);
        }

        heading = Some(movement);
        after_floor_change = false;
    }

    steps
}

fn floor_change_step(graph: &Graph, from: &Node, to: &Node) -> Step {
    let go_up = matches!(
        (from.floor.level, to.floor.level),
        (Some(from_level), Some(to_level)) if to_level > from_level
    );

    let target_label = match to.floor.level {
        Some(level) => format!("floor {level}"),
        None if !to.floor.name.trim().is_empty() => to.floor.name.clone(),
        None => "another floor".to_string(),
    };

    let mut text = if go_up {
        format!("Go up to {target_label}")
    } else {
        format!("Go down to {target_label}")
    };

    // Orient the arriving walker by whatever the destination node faces.
    if let Some(facing) = to.facing.map(Vec2::from_facing) {
        if let Some(hint) = landmark_hint(graph, to, facing, true) {
            text = format!("{text}. {hint}");
        }
    }

    Step {
        kind: if go_up {
            StepKind::ChangeFloorUp
        } else {
            StepKind::ChangeFloorDown
        },
        text,
        from: from.id,
        to: to.id,
        floor: to.floor.id,
        distance: None,
    }
}

fn turn_step(graph: &Graph, base: Vec2, movement: Vec2, from: &Node, to: &Node) -> Option<Step> {
    if base.is_zero() || movement.is_zero() {
        return None;
    }

    let angle = base.angle_to_deg(movement);
    if angle <= STRAIGHT_THRESHOLD_DEG {
        return None;
    }

    let (kind, text) = if angle >= U_TURN_THRESHOLD_DEG {
        (StepKind::UTurn, "Turn around")
    } else {
        let cross = base.cross(movement);
        if cross > 0.0 {
            (StepKind::TurnRight, "Turn right")
        } else if cross < 0.0 {
            (StepKind::TurnLeft, "Turn left")
        } else {
            return None;
        }
    };

    let mut text = text.to_string();
    // Landmarks are scouted facing the way the walker ends up after turning.
    if let Some(hint) = landmark_hint(graph, from, movement, true) {
        text = format!("{text}. {hint}");
    }

    Some(Step {
        kind,
        text,
        from: from.id,
        to: to.id,
        floor: from.floor.id,
        distance: None,
    })
}

/// Distance announced for a forward segment: the stored edge weight when the
/// graph has one, otherwise the coordinate distance, rounded to a whole
/// number.
fn forward_distance(graph: &Graph, from: &Node, to: &Node) -> i64 {
    let measured = graph
        .edge_weight(from.id, to.id)
        .unwrap_or_else(|| from.distance_to(to));
    measured.round() as i64
}

/// Append a forward instruction, merging into the preceding step when that
/// step is itself a forward run with nothing in between. An uninterrupted
/// straight stretch reads as one "Go forward D" rather than one per edge.
fn append_forward_step(steps: &mut Vec<Step>, distance: u32, from: &Node, to: &Node) {
    if let Some(last) = steps.last_mut() {
        if last.kind == StepKind::GoForward {
            let merged = last.distance.unwrap_or(0) + distance;
            last.distance = Some(merged);
            last.text = format!("Go forward {merged}");
            last.to = to.id;
            last.floor = to.floor.id;
            return;
        }
    }

    steps.push(Step {
        kind: StepKind::GoForward,
        text: format!("Go forward {distance}"),
        from: from.id,
        to: to.id,
        floor: from.floor.id,
        distance: Some(distance),
    });
}

/// Pick the nearest named, landmark-eligible node ahead of `pivot` within
/// [`LANDMARK_RADIUS`] and phrase which side it sits on. Corridors never
/// qualify; stairs and elevators are skipped when `exclude_vertical` is set.
fn landmark_hint(graph: &Graph, pivot: &Node, facing: Vec2, exclude_vertical: bool) -> Option<String> {
    if facing.is_zero() {
        return None;
    }

    let mut best: Option<(&Node, f64)> = None;
    for candidate in graph.nodes() {
        if candidate.id == pivot.id || candidate.floor.id != pivot.floor.id {
            continue;
        }
        if candidate.kind.is_corridor() {
            continue;
        }
        if exclude_vertical && candidate.kind.is_vertical_transit() {
            continue;
        }
        if candidate.name.trim().is_empty() {
            continue;
        }

        let offset = Vec2 {
            x: candidate.x - pivot.x,
            y: candidate.y - pivot.y,
        };
        let distance = offset.length();
        if distance > LANDMARK_RADIUS {
            continue;
        }
        if facing.dot(offset) <= 0.0 {
            continue;
        }

        // Nearest wins; equal distances break towards the smaller id so the
        // hint is stable across runs.
        let closer = match best {
            None => true,
            Some((current, current_distance)) => {
                distance < current_distance
                    || (distance == current_distance && candidate.id < current.id)
            }
        };
        if closer {
            best = Some((candidate, distance));
        }
    }

    let (landmark, _) = best?;
    let offset = Vec2 {
        x: landmark.x - pivot.x,
        y: landmark.y - pivot.y,
    };
    let cross = facing.cross(offset);
    let side = if cross.abs() < 1e-6 {
        "just ahead"
    } else if cross > 0.0 {
        "on your right"
    } else {
        "on your left"
    };

    Some(format!("{} will be {side}", landmark.name))
}

/// Plain 2-D vector in normalized floor coordinates (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq)]
struct Vec2 {
    x: f64,
    y: f64,
}

impl Vec2 {
    fn from_facing(direction: FacingDirection) -> Self {
        let (x, y) = direction.unit_vector();
        Self { x, y }
    }

    fn between(from: &Node, to: &Node) -> Self {
        Self {
            x: to.x - from.x,
            y: to.y - from.y,
        }
    }

    fn is_zero(self) -> bool {
        self.x.abs() < ZERO_EPSILON && self.y.abs() < ZERO_EPSILON
    }

    fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    fn cross(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Angle between two vectors in degrees, 0..=180.
    fn angle_to_deg(self, other: Self) -> f64 {
        let lengths = self.length() * other.length();
        if lengths == 0.0 {
            return 0.0;
        }
        let cos = (self.dot(other) / lengths).clamp(-1.0, 1.0);
        cos.acos().to_degrees()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RIGHT: Vec2 = Vec2 { x: 1.0, y: 0.0 };

    #[test]
    fn right_angle_turn_has_positive_cross() {
        let down = Vec2 { x: 0.0, y: 1.0 };
        assert!((RIGHT.angle_to_deg(down) - 90.0).abs() < 1e-9);
        assert!(RIGHT.cross(down) > 0.0);
    }

    #[test]
    fn reversal_measures_half_turn() {
        let back = Vec2 { x: -1.0, y: 0.0 };
        assert!((RIGHT.angle_to_deg(back) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn slight_drift_stays_under_straight_threshold() {
        let drift = Vec2 { x: 1.0, y: 0.05 };
        assert!(RIGHT.angle_to_deg(drift) < STRAIGHT_THRESHOLD_DEG);
    }

    #[test]
    fn degenerate_vectors_report_zero_angle() {
        let zero = Vec2 { x: 0.0, y: 0.0 };
        assert_eq!(RIGHT.angle_to_deg(zero), 0.0);
        assert!(zero.is_zero());
    }

    #[test]
    fn facing_vectors_are_screen_oriented() {
        assert_eq!(Vec2::from_facing(FacingDirection::Up), Vec2 { x: 0.0, y: -1.0 });
        assert_eq!(Vec2::from_facing(FacingDirection::Down), Vec2 { x: 0.0, y: 1.0 });
    }
}
