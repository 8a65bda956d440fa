use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::narration::Step;
use crate::routing::Route;
use crate::venue::NodeId;

/// Presentation style for turning a [`RouteReport`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    RichText,
}

/// Endpoint within a computed route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteEndpoint {
    pub id: NodeId,
    pub name: String,
}

/// Structured representation of a computed route that higher-level consumers
/// can serialise or render as text.
#[derive(Debug, Clone, Serialize)]
pub struct RouteReport {
    pub start: RouteEndpoint,
    pub end: RouteEndpoint,
    pub hops: usize,
    pub total_distance: f64,
    pub steps: Vec<Step>,
}

impl RouteReport {
    /// Convert a [`Route`] into a report with resolved endpoint names.
    pub fn from_route(route: &Route) -> Result<Self> {
        let first = route.path.first().ok_or(Error::EmptyRoute)?;
        let last = route.path.last().ok_or(Error::EmptyRoute)?;

        Ok(Self {
            start: RouteEndpoint {
                id: first.id,
                name: first.name.clone(),
            },
            end: RouteEndpoint {
                id: last.id,
                name: last.name.clone(),
            },
            hops: route.hop_count(),
            total_distance: route.total_distance,
            steps: route.steps.clone(),
        })
    }

    /// Render the report using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::RichText => self.render_rich(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({} hops, distance {})",
            self.start.name, self.end.name, self.hops, self.total_distance
        );
        for (index, step) in self.steps.iter().enumerate() {
            let _ = writeln!(buffer, "{:>3}: {}", index + 1, step.text);
        }
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**Route** _{} -> {}_ ({} hops, distance `{}`)",
            self.start.name, self.end.name, self.hops, self.total_distance
        );
        for (index, step) in self.steps.iter().enumerate() {
            let _ = writeln!(buffer, "* {:>2}. {}", index + 1, step.text);
        }
        buffer
    }
}
