//! Buildmap library entry points.
//!
//! This crate exposes helpers to load a venue's node snapshot, build the
//! per-request routing graph, compute shortest paths across floors, and
//! narrate the result as turn-by-turn steps. Higher-level consumers (CLI,
//! services) should only depend on the functions exported here instead of
//! reimplementing behavior.

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod narration;
pub mod output;
pub mod path;
pub mod routing;
pub mod venue;

pub use error::{Error, Result};
pub use graph::{Edge, Graph};
pub use narration::{narrate, Step, StepKind};
pub use output::{RouteRenderMode, RouteReport};
pub use path::{path_connects, reconstruct_path, shortest_path, DijkstraOutcome};
pub use routing::{route, validate_request, NodeSummary, Route, RouteRequest};
pub use venue::{
    load_snapshot, Connection, FacingDirection, FloorId, FloorRef, Node, NodeId, NodeKind,
    VenueSnapshot,
};
